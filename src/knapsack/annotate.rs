//! Attaches merit ratios to input items.

use super::types::{AnnotatedItem, Item};
use crate::error::{ExhaustiveError, Result};

/// Annotates a single item with `ratio = benefit / weight`.
///
/// `index` is only used to locate the item in the error.
///
/// # Errors
///
/// [`ExhaustiveError::InvalidItem`] if the weight is not a positive finite
/// number, the benefit is not finite, or the quotient overflows.
pub fn annotate(index: usize, item: &Item) -> Result<AnnotatedItem> {
    let invalid = || ExhaustiveError::InvalidItem {
        index,
        weight: item.weight,
        benefit: item.benefit,
    };

    if !item.weight.is_finite() || item.weight <= 0.0 || !item.benefit.is_finite() {
        return Err(invalid());
    }
    let ratio = item.benefit / item.weight;
    if !ratio.is_finite() {
        return Err(invalid());
    }

    Ok(AnnotatedItem {
        ratio,
        weight: item.weight,
        benefit: item.benefit,
    })
}

/// Annotates every item, preserving input order.
///
/// Fails on the first malformed item; nothing is returned for a partially
/// valid collection.
pub fn annotate_all(items: &[Item]) -> Result<Vec<AnnotatedItem>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| annotate(i, item))
        .collect()
}
