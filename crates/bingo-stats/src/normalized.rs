//! Normalized scores with an explicit "no data" state.
//!
//! Several attributes feeding the composite player score can be missing. Rather
//! than substituting `0.5` ad hoc at each site, normalizers return a
//! [`Normalized`] and the neutral fallback lives in exactly one place:
//! [`Normalized::value`].

/// Score used whenever an attribute has no data to normalize against.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Result of normalizing a single attribute onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized {
    /// A score computed from real data, clamped to `[0, 1]`.
    Score(f64),
    /// No usable data; resolves to [`NEUTRAL_SCORE`].
    NoData,
}

impl Normalized {
    /// Wraps a raw score, clamping it to `[0, 1]`.
    ///
    /// Non-finite input is treated as missing data.
    ///
    /// # Examples
    ///
    /// ```
    /// use bingo_stats::normalized::Normalized;
    ///
    /// assert_eq!(Normalized::score(1.5).value(), 1.0);
    /// assert_eq!(Normalized::score(f64::NAN), Normalized::NoData);
    /// ```
    #[must_use]
    pub fn score(value: f64) -> Self {
        if value.is_finite() {
            Self::Score(value.clamp(0.0, 1.0))
        } else {
            Self::NoData
        }
    }

    /// Returns the score, or [`NEUTRAL_SCORE`] when there is no data.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Score(value) => value,
            Self::NoData => NEUTRAL_SCORE,
        }
    }

    #[must_use]
    pub fn is_no_data(self) -> bool {
        matches!(self, Self::NoData)
    }
}

impl From<Option<f64>> for Normalized {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::NoData, Self::score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_is_neutral() {
        assert_eq!(Normalized::NoData.value(), NEUTRAL_SCORE);
        assert_eq!(Normalized::from(None).value(), NEUTRAL_SCORE);
        assert!(Normalized::from(None).is_no_data());
    }

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(Normalized::score(-0.2).value(), 0.0);
        assert_eq!(Normalized::score(0.25).value(), 0.25);
        assert_eq!(Normalized::from(Some(3.0)).value(), 1.0);
    }

    #[test]
    fn test_non_finite_is_no_data() {
        assert!(Normalized::score(f64::INFINITY).is_no_data());
        assert!(Normalized::from(Some(f64::NAN)).is_no_data());
    }
}
