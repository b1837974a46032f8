//! Exhaustive selection configuration.

use super::subsets::MAX_ENUMERABLE_ITEMS;
use super::types::Capacity;
use crate::error::{ExhaustiveError, Result};

/// Configuration for an exhaustive selection run.
///
/// # Examples
///
/// ```
/// use u_exhaustive::knapsack::{Capacity, ExhaustiveConfig};
///
/// let config = ExhaustiveConfig::default()
///     .with_capacity(12.0)
///     .with_max_items(20)
///     .with_parallel(false);
/// assert_eq!(config.capacity, Capacity::Limit(12.0));
/// assert_eq!(config.max_items, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveConfig {
    /// Bound on the total weight of the selection.
    pub capacity: Capacity,

    /// Maximum number of items accepted. Work grows as `2^max_items`.
    pub max_items: usize,

    /// Whether to score the mask space in parallel using rayon.
    ///
    /// Ignored when the `parallel` feature is disabled.
    pub parallel: bool,

    /// Minimum item count before the parallel path is taken.
    pub parallel_threshold: usize,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            capacity: Capacity::Unconstrained,
            max_items: 24,
            parallel: true,
            parallel_threshold: 16,
        }
    }
}

impl ExhaustiveConfig {
    /// Sets the capacity. Accepts an `f64`, an `Option<f64>` or a [`Capacity`].
    pub fn with_capacity(mut self, capacity: impl Into<Capacity>) -> Self {
        self.capacity = capacity.into();
        self
    }

    /// Removes the capacity bound.
    pub fn unconstrained(mut self) -> Self {
        self.capacity = Capacity::Unconstrained;
        self
    }

    /// Sets the maximum number of items accepted.
    pub fn with_max_items(mut self, n: usize) -> Self {
        self.max_items = n;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the minimum item count for the parallel path.
    pub fn with_parallel_threshold(mut self, n: usize) -> Self {
        self.parallel_threshold = n;
        self
    }

    /// Validates the configuration.
    ///
    /// A negative capacity is valid here; it surfaces as
    /// [`ExhaustiveError::NoFeasibleSolution`] once enumeration finds
    /// nothing that fits.
    pub fn validate(&self) -> Result<()> {
        if let Capacity::Limit(limit) = self.capacity {
            if limit.is_nan() {
                return Err(ExhaustiveError::InvalidConfig(
                    "capacity must not be NaN".into(),
                ));
            }
        }
        if self.max_items > MAX_ENUMERABLE_ITEMS {
            return Err(ExhaustiveError::InvalidConfig(format!(
                "max_items ({}) must be at most {MAX_ENUMERABLE_ITEMS}",
                self.max_items
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExhaustiveConfig::default();
        assert_eq!(config.capacity, Capacity::Unconstrained);
        assert_eq!(config.max_items, 24);
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ExhaustiveConfig::default()
            .with_capacity(Some(3.5))
            .with_max_items(10)
            .with_parallel(false)
            .with_parallel_threshold(4);
        assert_eq!(config.capacity, Capacity::Limit(3.5));
        assert_eq!(config.max_items, 10);
        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 4);

        let config = config.unconstrained();
        assert_eq!(config.capacity, Capacity::Unconstrained);
    }

    #[test]
    fn test_validate_nan_capacity() {
        let config = ExhaustiveConfig::default().with_capacity(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ExhaustiveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_negative_capacity_ok() {
        let config = ExhaustiveConfig::default().with_capacity(-1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_max_items_ceiling() {
        assert!(ExhaustiveConfig::default()
            .with_max_items(MAX_ENUMERABLE_ITEMS)
            .validate()
            .is_ok());
        assert!(ExhaustiveConfig::default()
            .with_max_items(MAX_ENUMERABLE_ITEMS + 1)
            .validate()
            .is_err());
    }
}
