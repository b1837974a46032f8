//! Value types flowing through the selection pipeline.

/// An input unit: a weight and the benefit it carries.
///
/// Validity (positive finite weight, finite benefit) is checked when the
/// item is annotated, not at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight counted against the capacity. Must be positive.
    pub weight: f64,
    /// Benefit carried by the item.
    pub benefit: f64,
}

impl Item {
    /// Creates an item from a weight and a benefit.
    pub const fn new(weight: f64, benefit: f64) -> Self {
        Self { weight, benefit }
    }
}

impl From<(f64, f64)> for Item {
    fn from((weight, benefit): (f64, f64)) -> Self {
        Self::new(weight, benefit)
    }
}

impl From<[f64; 2]> for Item {
    fn from([weight, benefit]: [f64; 2]) -> Self {
        Self::new(weight, benefit)
    }
}

/// An item with its merit ratio (`benefit / weight`) attached.
///
/// Only produced by [`annotate`](super::annotate); `weight > 0` and all
/// three fields are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotatedItem {
    /// Merit ratio, `benefit / weight`.
    pub ratio: f64,
    /// Weight of the underlying item.
    pub weight: f64,
    /// Benefit of the underlying item.
    pub benefit: f64,
}

impl AnnotatedItem {
    /// Strips the ratio, returning the plain item.
    pub fn item(&self) -> Item {
        Item::new(self.weight, self.benefit)
    }
}

/// Upper bound on the total weight of a selected subset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capacity {
    /// No bound: every subset is feasible.
    #[default]
    Unconstrained,
    /// Total weight must not exceed this value.
    ///
    /// A negative limit admits nothing, not even the empty subset.
    Limit(f64),
}

impl Capacity {
    /// Returns whether a subset of the given total weight fits.
    #[inline]
    pub fn admits(&self, total_weight: f64) -> bool {
        match *self {
            Capacity::Unconstrained => true,
            Capacity::Limit(limit) => total_weight <= limit,
        }
    }

    /// The bound as a number; `Unconstrained` maps to positive infinity.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Capacity::Unconstrained => f64::INFINITY,
            Capacity::Limit(limit) => limit,
        }
    }
}

impl From<f64> for Capacity {
    fn from(limit: f64) -> Self {
        Capacity::Limit(limit)
    }
}

impl From<Option<f64>> for Capacity {
    fn from(limit: Option<f64>) -> Self {
        limit.map_or(Capacity::Unconstrained, Capacity::Limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_conversions() {
        assert_eq!(Item::from((3.0, 5.0)), Item::new(3.0, 5.0));
        assert_eq!(Item::from([4.0, 2.0]), Item::new(4.0, 2.0));
    }

    #[test]
    fn test_annotated_item_strips_ratio() {
        let a = AnnotatedItem {
            ratio: 2.5,
            weight: 2.0,
            benefit: 5.0,
        };
        assert_eq!(a.item(), Item::new(2.0, 5.0));
    }

    #[test]
    fn test_capacity_admits() {
        assert!(Capacity::Unconstrained.admits(1e300));
        assert!(Capacity::Limit(3.0).admits(3.0));
        assert!(!Capacity::Limit(3.0).admits(3.0 + 1e-9));
        assert!(Capacity::Limit(0.0).admits(0.0));
        assert!(!Capacity::Limit(-1.0).admits(0.0));
    }

    #[test]
    fn test_capacity_from_option() {
        assert_eq!(Capacity::from(None), Capacity::Unconstrained);
        assert_eq!(Capacity::from(Some(12.0)), Capacity::Limit(12.0));
        assert_eq!(Capacity::default(), Capacity::Unconstrained);
        assert!(Capacity::Unconstrained.as_f64().is_infinite());
    }
}
