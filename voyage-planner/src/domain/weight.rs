//! Route weight type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a route weight is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route weight: {reason}")]
pub struct InvalidWeight {
    reason: &'static str,
}

/// The time a route takes, in days.
///
/// Weights are finite and non-negative. Bounded-time searches rely on time
/// never decreasing along a journey, so a negative weight cannot be built.
///
/// # Examples
///
/// ```
/// use voyage_planner::domain::Weight;
///
/// assert_eq!(Weight::new(4.0).unwrap().days(), 4.0);
/// assert!(Weight::new(-1.0).is_err());
/// assert!(Weight::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Create a weight from a number of days.
    pub fn new(days: f64) -> Result<Self, InvalidWeight> {
        if !days.is_finite() {
            return Err(InvalidWeight {
                reason: "must be finite",
            });
        }

        if days < 0.0 {
            return Err(InvalidWeight {
                reason: "must not be negative",
            });
        }

        Ok(Weight(days))
    }

    /// Returns the weight in days.
    pub fn days(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = InvalidWeight;

    fn try_from(days: f64) -> Result<Self, Self::Error> {
        Weight::new(days)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
