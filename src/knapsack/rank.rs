//! Canonical traversal order for enumeration.
//!
//! Items are ordered by descending merit ratio; equal ratios are broken by
//! descending weight. Every subset produced downstream is a subsequence of
//! this order, and the selection tie-break (smallest bitmask) is defined
//! relative to it.

use std::cmp::Ordering;

use super::types::AnnotatedItem;

/// Merit comparator: `Less` means `a` ranks before `b`.
///
/// Uses `f64::total_cmp`, so the ordering is total even for values the
/// annotator would not produce.
pub fn compare(a: &AnnotatedItem, b: &AnnotatedItem) -> Ordering {
    b.ratio
        .total_cmp(&a.ratio)
        .then_with(|| b.weight.total_cmp(&a.weight))
}

/// Returns a new sequence sorted by [`compare`].
///
/// The sort is stable: items equal on both keys keep their input order.
pub fn rank(items: &[AnnotatedItem]) -> Vec<AnnotatedItem> {
    let mut ranked = items.to_vec();
    ranked.sort_by(compare);
    ranked
}
