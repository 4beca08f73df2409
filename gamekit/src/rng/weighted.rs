//! Weighted discrete choices

use serde::{Deserialize, Serialize};

/// Weight assigned when none is given
pub const DEFAULT_WEIGHT: f64 = 100.0;

/// A value paired with a non-negative selection weight
///
/// A slice of these defines a discrete distribution. Weights are not
/// pre-normalized; [`RandomEngine::chance`](super::RandomEngine::chance)
/// divides by their sum at selection time.
///
/// # Example
/// ```
/// use gamekit_core::WeightedChoice;
///
/// let common = WeightedChoice::new("slime");
/// let rare = WeightedChoice::with_weight("dragon", 1.0);
/// assert_eq!(common.weight, 100.0);
/// assert_eq!(rare.weight, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedChoice<T> {
    pub value: T,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl<T> WeightedChoice<T> {
    /// Choice with [`DEFAULT_WEIGHT`]
    pub fn new(value: T) -> Self {
        Self::with_weight(value, DEFAULT_WEIGHT)
    }

    /// Choice with an explicit weight
    pub fn with_weight(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

impl<T> From<(T, f64)> for WeightedChoice<T> {
    fn from((value, weight): (T, f64)) -> Self {
        Self::with_weight(value, weight)
    }
}
