//! Lazy power-set enumeration over a ranked sequence.
//!
//! Subset `m` (for `0 <= m < 2^N`) contains ranked element `i` iff bit `i`
//! of `m` is set. Subsets are yielded in ascending mask order as borrowed
//! views, so a full pass needs no allocation beyond the ranked sequence.

use std::iter::FusedIterator;
use std::ops::Range;

use super::types::AnnotatedItem;
use crate::error::{ExhaustiveError, Result};

/// Largest sequence length whose mask space fits in a `u64`.
pub const MAX_ENUMERABLE_ITEMS: usize = 63;

/// Number of subsets of an `n`-element sequence, or `None` if `2^n`
/// does not fit in the mask type.
pub fn subset_count(n: usize) -> Option<u64> {
    if n > MAX_ENUMERABLE_ITEMS {
        return None;
    }
    Some(1u64 << n)
}

/// One subset of a ranked sequence, identified by its bitmask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subset<'a> {
    ranked: &'a [AnnotatedItem],
    mask: u64,
}

impl<'a> Subset<'a> {
    /// Builds the subset for `mask`, or `None` if the mask selects
    /// positions past the end of `ranked`.
    pub fn from_mask(ranked: &'a [AnnotatedItem], mask: u64) -> Option<Self> {
        let count = subset_count(ranked.len())?;
        (mask < count).then_some(Self { ranked, mask })
    }

    /// The bitmask over the ranked sequence.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// True for the empty subset (mask 0).
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Whether ranked position `index` is a member.
    pub fn contains(&self, index: usize) -> bool {
        index < self.ranked.len() && self.mask & (1u64 << index) != 0
    }

    /// Ranked positions of the members, ascending.
    pub fn indices(&self) -> Indices {
        Indices {
            remaining: self.mask,
        }
    }

    /// Members in ranked order.
    pub fn members(&self) -> Members<'a> {
        Members {
            ranked: self.ranked,
            indices: self.indices(),
        }
    }

    /// Copies the members out in ranked order.
    pub fn to_vec(&self) -> Vec<AnnotatedItem> {
        self.members().copied().collect()
    }
}

/// Iterator over the set bit positions of a mask, lowest first.
#[derive(Debug, Clone)]
pub struct Indices {
    remaining: u64,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.remaining.trailing_zeros() as usize;
        // clear lowest set bit
        self.remaining &= self.remaining - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Indices {}
impl FusedIterator for Indices {}

/// Iterator over the members of a [`Subset`] in ranked order.
#[derive(Debug, Clone)]
pub struct Members<'a> {
    ranked: &'a [AnnotatedItem],
    indices: Indices,
}

impl<'a> Iterator for Members<'a> {
    type Item = &'a AnnotatedItem;

    fn next(&mut self) -> Option<&'a AnnotatedItem> {
        self.indices.next().map(|i| &self.ranked[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for Members<'_> {}
impl FusedIterator for Members<'_> {}

/// Finite, non-restartable stream of subsets in ascending mask order.
///
/// # Examples
///
/// ```
/// use u_exhaustive::knapsack::{annotate_all, rank, Item, SubsetEnumerator};
///
/// let ranked = rank(&annotate_all(&[Item::new(1.0, 2.0), Item::new(2.0, 1.0)]).unwrap());
/// let masks: Vec<u64> = SubsetEnumerator::new(&ranked)
///     .unwrap()
///     .map(|s| s.mask())
///     .collect();
/// assert_eq!(masks, vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct SubsetEnumerator<'a> {
    ranked: &'a [AnnotatedItem],
    next: u64,
    end: u64,
}

impl<'a> SubsetEnumerator<'a> {
    /// Enumerates all `2^N` subsets of `ranked`.
    ///
    /// # Errors
    ///
    /// [`ExhaustiveError::ComplexityExceeded`] if `ranked` is longer than
    /// [`MAX_ENUMERABLE_ITEMS`].
    pub fn new(ranked: &'a [AnnotatedItem]) -> Result<Self> {
        let end = Self::total(ranked)?;
        Ok(Self {
            ranked,
            next: 0,
            end,
        })
    }

    /// Enumerates the masks in `range`, clamped to the mask space.
    pub fn with_range(ranked: &'a [AnnotatedItem], range: Range<u64>) -> Result<Self> {
        let total = Self::total(ranked)?;
        let end = range.end.min(total);
        Ok(Self {
            ranked,
            next: range.start.min(end),
            end,
        })
    }

    /// Number of subsets not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.end - self.next
    }

    fn total(ranked: &[AnnotatedItem]) -> Result<u64> {
        subset_count(ranked.len()).ok_or(ExhaustiveError::ComplexityExceeded {
            items: ranked.len(),
            limit: MAX_ENUMERABLE_ITEMS,
        })
    }
}

impl<'a> Iterator for SubsetEnumerator<'a> {
    type Item = Subset<'a>;

    fn next(&mut self) -> Option<Subset<'a>> {
        if self.next >= self.end {
            return None;
        }
        let subset = Subset {
            ranked: self.ranked,
            mask: self.next,
        };
        self.next += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for SubsetEnumerator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ranked(n: usize) -> Vec<AnnotatedItem> {
        (0..n)
            .map(|i| AnnotatedItem {
                ratio: (n - i) as f64,
                weight: (i + 1) as f64,
                benefit: ((n - i) * (i + 1)) as f64,
            })
            .collect()
    }

    #[test]
    fn test_subset_count() {
        assert_eq!(subset_count(0), Some(1));
        assert_eq!(subset_count(10), Some(1024));
        assert_eq!(subset_count(63), Some(1u64 << 63));
        assert_eq!(subset_count(64), None);
    }

    #[test]
    fn test_cardinality_and_bijection() {
        for n in 0..=10 {
            let seq = ranked(n);
            let subsets: Vec<Subset> = SubsetEnumerator::new(&seq).unwrap().collect();
            assert_eq!(subsets.len(), 1 << n, "n = {n}");

            let mut seen = HashSet::new();
            for (m, subset) in subsets.iter().enumerate() {
                assert_eq!(subset.mask(), m as u64);
                // rebuild the mask from membership and check it is unique
                let rebuilt: u64 = subset.indices().map(|i| 1u64 << i).sum();
                assert_eq!(rebuilt, subset.mask());
                assert!(seen.insert(rebuilt));
            }
        }
    }

    #[test]
    fn test_empty_sequence_yields_only_empty_subset() {
        let seq: Vec<AnnotatedItem> = Vec::new();
        let subsets: Vec<Subset> = SubsetEnumerator::new(&seq).unwrap().collect();
        assert_eq!(subsets.len(), 1);
        assert!(subsets[0].is_empty());
        assert!(subsets[0].to_vec().is_empty());
    }

    #[test]
    fn test_members_preserve_ranked_order() {
        let seq = ranked(6);
        for subset in SubsetEnumerator::new(&seq).unwrap() {
            let positions: Vec<usize> = subset.indices().collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            let members = subset.to_vec();
            assert_eq!(members.len(), subset.len());
            for (member, &pos) in members.iter().zip(&positions) {
                assert_eq!(*member, seq[pos]);
            }
        }
    }

    #[test]
    fn test_first_and_last_subsets() {
        let seq = ranked(4);
        let mut it = SubsetEnumerator::new(&seq).unwrap();
        assert!(it.next().unwrap().is_empty());
        let full = it.last().unwrap();
        assert_eq!(full.mask(), 0b1111);
        assert_eq!(full.to_vec(), seq);
    }

    #[test]
    fn test_contains() {
        let seq = ranked(4);
        let subset = Subset::from_mask(&seq, 0b1010).unwrap();
        assert!(!subset.contains(0));
        assert!(subset.contains(1));
        assert!(!subset.contains(2));
        assert!(subset.contains(3));
        assert!(!subset.contains(40));
        assert_eq!(subset.len(), 2);
    }

    #[test]
    fn test_from_mask_rejects_out_of_range() {
        let seq = ranked(3);
        assert!(Subset::from_mask(&seq, 7).is_some());
        assert!(Subset::from_mask(&seq, 8).is_none());
    }

    #[test]
    fn test_with_range_shards_mask_space() {
        let seq = ranked(5);
        let a: Vec<u64> = SubsetEnumerator::with_range(&seq, 0..10)
            .unwrap()
            .map(|s| s.mask())
            .collect();
        let b: Vec<u64> = SubsetEnumerator::with_range(&seq, 10..100)
            .unwrap()
            .map(|s| s.mask())
            .collect();
        assert_eq!(a, (0..10).collect::<Vec<_>>());
        assert_eq!(b, (10..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_not_restartable() {
        let seq = ranked(2);
        let mut it = SubsetEnumerator::new(&seq).unwrap();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.by_ref().count(), 4);
        assert_eq!(it.remaining(), 0);
        assert!(it.next().is_none());
    }

    #[test]
    fn test_too_many_items() {
        let seq = ranked(64);
        let err = SubsetEnumerator::new(&seq).unwrap_err();
        assert_eq!(
            err,
            ExhaustiveError::ComplexityExceeded {
                items: 64,
                limit: MAX_ENUMERABLE_ITEMS
            }
        );
    }
}
