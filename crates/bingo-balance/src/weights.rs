//! Attribute weights for the composite player score.

use serde::{Deserialize, Serialize};

/// Relative importance of each balancing attribute.
///
/// Weights need not sum to one; the composite score divides by their sum.
///
/// # Examples
///
/// ```
/// use bingo_balance::weights::BalancingWeights;
///
/// let weights: BalancingWeights = serde_json::from_str(r#"{ "ehb": 1.0 }"#).unwrap();
/// assert_eq!(weights.ehb, 1.0);
/// assert_eq!(weights.ehp, 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancingWeights {
    pub ehp: f64,
    pub ehb: f64,
    pub timezone: f64,
    pub daily_hours: f64,
    pub skill_level: f64,
}

impl Default for BalancingWeights {
    fn default() -> Self {
        Self {
            ehp: 0.3,
            ehb: 0.3,
            timezone: 0.1,
            daily_hours: 0.2,
            skill_level: 0.1,
        }
    }
}

impl BalancingWeights {
    #[must_use]
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.ehp,
            self.ehb,
            self.timezone,
            self.daily_hours,
            self.skill_level,
        ]
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Returns `true` if every weight is finite and non-negative and the sum
    /// does not overflow.
    ///
    /// ```
    /// use bingo_balance::weights::BalancingWeights;
    ///
    /// assert!(BalancingWeights::default().is_valid());
    /// let negative = BalancingWeights { ehp: -1.0, ..BalancingWeights::default() };
    /// assert!(!negative.is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.as_array().iter().all(|w| w.is_finite() && *w >= 0.0) && self.sum().is_finite()
    }
}
