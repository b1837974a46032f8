//! Exhaustive selection engine.
//!
//! # Algorithm
//!
//! 1. Annotate every item with its merit ratio (fail fast on bad input)
//! 2. Check the item count against the enumeration bound
//! 3. Rank by descending ratio, then descending weight
//! 4. Stream all `2^N` masks: score, filter by capacity, fold the best
//! 5. Unwrap the winning subset back to plain items in ranked order
//!
//! Step 4 runs over the mask range with rayon when the `parallel` feature
//! is enabled and the input is large enough. Each worker keeps a local best
//! and the partials are combined with the same comparator, so both paths
//! select the same subset.

use super::annotate::annotate_all;
use super::config::ExhaustiveConfig;
use super::rank::rank;
use super::score::{filter_feasible, prefer, score, select_best, ScoredSubset};
use super::subsets::{subset_count, SubsetEnumerator, MAX_ENUMERABLE_ITEMS};
use super::types::{AnnotatedItem, Capacity, Item};
use crate::error::{ExhaustiveError, Result};

/// Result of an exhaustive selection run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExhaustiveResult {
    /// Selected items in ranked order (not the caller's input order).
    pub selection: Vec<Item>,

    /// Mask of the selected subset over [`ranked`](Self::ranked).
    pub best_mask: u64,

    /// Sum of the selected items' merit ratios.
    pub total_ratio: f64,

    /// Sum of the selected items' weights.
    pub total_weight: f64,

    /// The ranked sequence the mask refers to.
    pub ranked: Vec<AnnotatedItem>,

    /// Number of subsets enumerated (`2^N`).
    pub subsets_evaluated: u64,

    /// Number of subsets that fit the capacity.
    pub feasible_subsets: u64,
}

/// Executes the exhaustive selection pipeline.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Runs the selection over `items` with the given configuration.
    ///
    /// # Errors
    ///
    /// - [`ExhaustiveError::InvalidConfig`] if `config` fails validation
    /// - [`ExhaustiveError::InvalidItem`] for the first malformed item
    /// - [`ExhaustiveError::ComplexityExceeded`] if there are more than
    ///   `config.max_items` items
    /// - [`ExhaustiveError::NoFeasibleSolution`] if no subset fits
    ///
    /// # Examples
    ///
    /// ```
    /// use u_exhaustive::knapsack::{ExhaustiveConfig, ExhaustiveRunner, Item};
    ///
    /// let items = [Item::new(1.0, 1.0), Item::new(2.0, 1.0), Item::new(3.0, 5.0)];
    /// let config = ExhaustiveConfig::default().with_capacity(3.0);
    /// let result = ExhaustiveRunner::run(&items, &config).unwrap();
    /// assert_eq!(result.selection, vec![Item::new(3.0, 5.0)]);
    /// assert_eq!(result.subsets_evaluated, 8);
    /// ```
    pub fn run(items: &[Item], config: &ExhaustiveConfig) -> Result<ExhaustiveResult> {
        config.validate()?;

        let annotated = annotate_all(items)?;
        if annotated.len() > config.max_items {
            tracing::warn!(
                items = annotated.len(),
                limit = config.max_items,
                "refusing exhaustive enumeration"
            );
            return Err(ExhaustiveError::ComplexityExceeded {
                items: annotated.len(),
                limit: config.max_items,
            });
        }

        let ranked = rank(&annotated);
        let subsets_evaluated =
            subset_count(ranked.len()).ok_or(ExhaustiveError::ComplexityExceeded {
                items: ranked.len(),
                limit: MAX_ENUMERABLE_ITEMS,
            })?;

        let parallel = config.parallel && ranked.len() >= config.parallel_threshold;
        tracing::debug!(
            items = ranked.len(),
            subsets = subsets_evaluated,
            capacity = ?config.capacity,
            parallel,
            "enumerating subsets"
        );

        let search = if parallel {
            search_parallel(&ranked, config.capacity)?
        } else {
            search_sequential(&ranked, config.capacity)?
        };

        let Some(best) = search.best else {
            tracing::warn!(capacity = ?config.capacity, "no subset fits the capacity");
            return Err(ExhaustiveError::NoFeasibleSolution {
                capacity: config.capacity.as_f64(),
            });
        };

        tracing::debug!(
            mask = best.members.mask(),
            total_ratio = best.total_ratio,
            total_weight = best.total_weight,
            feasible = search.feasible,
            "selected subset"
        );

        let selection = best.members.members().map(AnnotatedItem::item).collect();
        let (best_mask, total_ratio, total_weight) =
            (best.members.mask(), best.total_ratio, best.total_weight);
        let feasible_subsets = search.feasible;

        Ok(ExhaustiveResult {
            selection,
            best_mask,
            total_ratio,
            total_weight,
            ranked,
            subsets_evaluated,
            feasible_subsets,
        })
    }
}

/// Selects the best subset of `items` under `capacity`.
///
/// Shorthand for [`ExhaustiveRunner::run`] with default limits, returning
/// only the selected items.
///
/// # Examples
///
/// ```
/// use u_exhaustive::knapsack::{solve, Capacity, Item};
///
/// let items: Vec<Item> = [[1.0, 1.0], [2.0, 1.0], [3.0, 2.0], [3.0, 5.0], [4.0, 2.0], [4.0, 5.0]]
///     .into_iter()
///     .map(Item::from)
///     .collect();
/// let chosen = solve(&items, Capacity::Limit(12.0)).unwrap();
/// assert_eq!(
///     chosen,
///     vec![Item::new(3.0, 5.0), Item::new(4.0, 5.0), Item::new(1.0, 1.0), Item::new(3.0, 2.0)]
/// );
/// ```
pub fn solve(items: &[Item], capacity: Capacity) -> Result<Vec<Item>> {
    let config = ExhaustiveConfig::default().with_capacity(capacity);
    ExhaustiveRunner::run(items, &config).map(|r| r.selection)
}

/// Best feasible candidate so far and how many feasible subsets were seen.
#[derive(Clone, Copy)]
struct Search<'a> {
    best: Option<ScoredSubset<'a>>,
    feasible: u64,
}

impl<'a> Search<'a> {
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn empty() -> Self {
        Self {
            best: None,
            feasible: 0,
        }
    }

    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn push(self, candidate: ScoredSubset<'a>) -> Self {
        Self::merge(
            self,
            Self {
                best: Some(candidate),
                feasible: 1,
            },
        )
    }

    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn merge(a: Self, b: Self) -> Self {
        let best = match (a.best, b.best) {
            (Some(x), Some(y)) => Some(prefer(x, y)),
            (x, y) => x.or(y),
        };
        Self {
            best,
            feasible: a.feasible + b.feasible,
        }
    }
}

fn search_sequential(ranked: &[AnnotatedItem], capacity: Capacity) -> Result<Search<'_>> {
    let mut feasible = 0u64;
    let scored = SubsetEnumerator::new(ranked)?.map(score);
    let best = select_best(filter_feasible(scored, capacity).inspect(|_| feasible += 1));
    Ok(Search { best, feasible })
}

/// Splits the mask space into contiguous shards, one enumerator each.
#[cfg(feature = "parallel")]
fn search_parallel(ranked: &[AnnotatedItem], capacity: Capacity) -> Result<Search<'_>> {
    use rayon::prelude::*;

    let total = SubsetEnumerator::new(ranked)?.remaining();
    let shards = (rayon::current_num_threads() as u64 * 4).clamp(1, total);
    let shard_len = total.div_ceil(shards);

    (0..shards)
        .into_par_iter()
        .map(|shard| {
            let start = shard * shard_len;
            let end = (start + shard_len).min(total);
            SubsetEnumerator::with_range(ranked, start..end).map(|enumerator| {
                filter_feasible(enumerator.map(score), capacity).fold(Search::empty(), Search::push)
            })
        })
        .try_reduce(Search::empty, |a, b| Ok(Search::merge(a, b)))
}

#[cfg(not(feature = "parallel"))]
fn search_parallel(ranked: &[AnnotatedItem], capacity: Capacity) -> Result<Search<'_>> {
    search_sequential(ranked, capacity)
}

// ============================================================================
// Tests
// ============================================================================
