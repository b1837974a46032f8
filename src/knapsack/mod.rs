//! Exhaustive ratio-merit subset selection.
//!
//! Chooses, from items carrying a weight and a benefit, the subset whose
//! **sum of benefit-to-weight ratios** is largest while its total weight
//! stays within a capacity. Every one of the `2^N` subsets is examined;
//! there is no dynamic programming and no pruning, so inputs are bounded
//! by [`ExhaustiveConfig::max_items`].
//!
//! # Pipeline
//!
//! - [`annotate_all`]: attach `ratio = benefit / weight`, rejecting bad items
//! - [`rank`]: descending ratio, ties by descending weight
//! - [`SubsetEnumerator`]: lazy masks `0..2^N` over the ranked sequence
//! - [`score`]: sum member ratios and weights
//! - [`filter_feasible`]: drop subsets heavier than the [`Capacity`]
//! - [`select_best`]: highest ratio sum, ties to the smaller mask
//!
//! [`ExhaustiveRunner`] composes the stages; [`solve`] is the one-call form.
//!
//! # Examples
//!
//! ```
//! use u_exhaustive::knapsack::{solve, Capacity, Item};
//!
//! let items = [Item::new(1.0, 1.0), Item::new(2.0, 1.0)];
//! assert_eq!(solve(&items, Capacity::Limit(2.0)).unwrap(), vec![Item::new(1.0, 1.0)]);
//! ```

mod annotate;
mod config;
mod rank;
mod runner;
mod score;
mod subsets;
mod types;

pub use annotate::{annotate, annotate_all};
pub use config::ExhaustiveConfig;
pub use rank::{compare, rank};
pub use runner::{solve, ExhaustiveResult, ExhaustiveRunner};
pub use score::{filter_feasible, prefer, preference, score, select_best, ScoredSubset};
pub use subsets::{
    subset_count, Indices, Members, Subset, SubsetEnumerator, MAX_ENUMERABLE_ITEMS,
};
pub use types::{AnnotatedItem, Capacity, Item};
