//! Aggregate scoring, capacity filtering and best-candidate selection.
//!
//! The objective is the **sum of member merit ratios**, not the sum of
//! benefits. A subset of many efficient items can therefore beat a subset
//! with larger total benefit.

use std::cmp::Ordering;

use super::subsets::Subset;
use super::types::Capacity;

/// A subset with its aggregate totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSubset<'a> {
    /// Sum of member ratios.
    pub total_ratio: f64,
    /// Sum of member weights.
    pub total_weight: f64,
    /// The scored subset.
    pub members: Subset<'a>,
}

/// Sums ratios and weights over the members.
///
/// Members are summed in ranked order, so the totals for a given mask are
/// bit-identical no matter which execution path scores it.
pub fn score(subset: Subset<'_>) -> ScoredSubset<'_> {
    let (total_ratio, total_weight) = subset
        .members()
        .fold((0.0, 0.0), |(r, w), item| (r + item.ratio, w + item.weight));
    ScoredSubset {
        total_ratio,
        total_weight,
        members: subset,
    }
}

/// Keeps only the candidates whose total weight fits `capacity`.
pub fn filter_feasible<'a, I>(
    scored: I,
    capacity: Capacity,
) -> impl Iterator<Item = ScoredSubset<'a>>
where
    I: IntoIterator<Item = ScoredSubset<'a>>,
{
    scored
        .into_iter()
        .filter(move |s| capacity.admits(s.total_weight))
}

/// Orders two candidates by preference; `Greater` means `a` is preferred.
///
/// Higher total ratio wins. Equal totals go to the smaller mask, i.e. the
/// subset enumerated first.
pub fn preference(a: &ScoredSubset<'_>, b: &ScoredSubset<'_>) -> Ordering {
    a.total_ratio
        .total_cmp(&b.total_ratio)
        .then_with(|| b.members.mask().cmp(&a.members.mask()))
}

/// Returns the preferred of two candidates.
///
/// Associative and commutative, so usable as a parallel reduction.
pub fn prefer<'a>(a: ScoredSubset<'a>, b: ScoredSubset<'a>) -> ScoredSubset<'a> {
    if preference(&a, &b) == Ordering::Less {
        b
    } else {
        a
    }
}

/// Selects the preferred candidate of a stream in a single pass.
///
/// Returns `None` for an empty stream.
pub fn select_best<'a, I>(candidates: I) -> Option<ScoredSubset<'a>>
where
    I: IntoIterator<Item = ScoredSubset<'a>>,
{
    candidates.into_iter().reduce(prefer)
}
