//! Exhaustive combinatorial selection.
//!
//! Provides a brute-force optimizer that enumerates every subset of a
//! small item collection:
//!
//! - **Knapsack (ratio merit)**: picks the subset with the greatest sum of
//!   per-item benefit/weight ratios whose total weight fits a capacity.
//!
//! # Architecture
//!
//! Each stage is a pure function over immutable values. Enumeration is
//! lazy over a `u64` mask space, so scoring, filtering and selection run
//! in one streaming pass. With the `parallel` feature the mask space is
//! split across rayon workers.

pub mod error;
pub mod knapsack;

pub use error::{ExhaustiveError, Result};
