//! Error types for exhaustive optimization runs.

use thiserror::Error;

/// Errors that terminate an optimization run.
///
/// Every variant is terminal: the computation is deterministic, so
/// retrying with the same input reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExhaustiveError {
    /// An item failed annotation. Causes:
    ///
    /// - the weight is zero, negative or non-finite
    /// - the benefit is non-finite
    /// - `benefit / weight` overflows to infinity, which happens for tiny
    ///   (for example subnormal) positive weights
    #[error("invalid item at index {index}: weight={weight}, benefit={benefit}")]
    InvalidItem {
        /// Position of the offending item in the caller's input.
        index: usize,
        /// Offending weight.
        weight: f64,
        /// Offending benefit.
        benefit: f64,
    },

    /// No subset, not even the empty one, satisfies the capacity.
    #[error("no feasible subset for capacity {capacity}")]
    NoFeasibleSolution {
        /// The capacity that admitted nothing.
        capacity: f64,
    },

    /// The item count exceeds the configured enumeration bound.
    #[error("{items} items exceed the enumeration limit of {limit} (2^{items} subsets)")]
    ComplexityExceeded {
        /// Number of items supplied.
        items: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// The run configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExhaustiveError>;
