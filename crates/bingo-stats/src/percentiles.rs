use crate::normalized::Normalized;

/// Comparison pool for percentile-rank normalization.
///
/// A value's percentile rank is the fraction of pool observations that are less
/// than or equal to it:
///
/// ```text
/// rank(v) = |{ x ∈ pool : x ≤ v }| / |pool|
/// ```
///
/// The result always lies in `[0, 1]`. Missing values and empty pools resolve to
/// [`Normalized::NoData`].
///
/// # Examples
///
/// ```
/// use bingo_stats::percentiles::PercentileRank;
///
/// let pool = PercentileRank::new([300.0, 100.0, 200.0]);
/// assert_eq!(pool.len(), 3);
/// assert_eq!(pool.rank(Some(100.0)).value(), 1.0 / 3.0);
/// assert_eq!(pool.rank(Some(250.0)).value(), 2.0 / 3.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PercentileRank {
    /// Finite pool observations, sorted ascending.
    sorted: Vec<f64>,
}

impl PercentileRank {
    /// Builds a pool from unsorted observations.
    ///
    /// Non-finite observations are discarded.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self { sorted }
    }

    /// Builds a pool from the present values of optional observations.
    ///
    /// # Examples
    ///
    /// ```
    /// use bingo_stats::percentiles::PercentileRank;
    ///
    /// let pool = PercentileRank::from_optional([Some(1.0), None, Some(3.0)]);
    /// assert_eq!(pool.len(), 2);
    /// ```
    #[must_use]
    pub fn from_optional<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        Self::new(values.into_iter().flatten())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Returns the percentile rank of `value` within the pool.
    ///
    /// Returns [`Normalized::NoData`] when `value` is missing or not finite, or
    /// when the pool holds no observations at all.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn rank(&self, value: Option<f64>) -> Normalized {
        let Some(value) = value.filter(|v| v.is_finite()) else {
            return Normalized::NoData;
        };
        if self.sorted.is_empty() {
            return Normalized::NoData;
        }
        let at_or_below = self.sorted.partition_point(|x| *x <= value);
        Normalized::score(at_or_below as f64 / self.sorted.len() as f64)
    }
}

/// Percentile-rank normalization of a single value against a pool.
///
/// Convenience wrapper around [`PercentileRank`] for one-off lookups. Returns the
/// resolved score, so missing data yields the neutral `0.5`.
///
/// # Examples
///
/// ```
/// use bingo_stats::percentiles::percentile_normalize;
///
/// assert_eq!(percentile_normalize(Some(7.0), &[]), 0.5);
/// assert_eq!(percentile_normalize(Some(7.0), &[5.0, 7.0, 9.0, 11.0]), 0.5);
/// ```
#[must_use]
pub fn percentile_normalize(value: Option<f64>, pool: &[f64]) -> f64 {
    PercentileRank::new(pool.iter().copied()).rank(value).value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pool_is_neutral() {
        let pool = PercentileRank::new([]);
        assert!(pool.rank(Some(42.0)).is_no_data());
        assert_eq!(percentile_normalize(Some(-1.0), &[]), 0.5);
        assert_eq!(percentile_normalize(None, &[]), 0.5);
    }

    #[test]
    fn test_missing_value_is_neutral() {
        let pool = PercentileRank::new([1.0, 2.0, 3.0]);
        assert_eq!(pool.rank(None).value(), 0.5);
        assert_eq!(pool.rank(Some(f64::NAN)).value(), 0.5);
    }

    #[test]
    fn test_signed_zeros_are_equal() {
        let pool = PercentileRank::new([0.0, 1.0]);
        assert_eq!(pool.rank(Some(-0.0)).value(), 0.5);
        let pool = PercentileRank::new([-0.0, 0.0, 1.0]);
        assert_eq!(pool.rank(Some(0.0)).value(), 2.0 / 3.0);
        assert_eq!(pool.rank(Some(-0.0)).value(), 2.0 / 3.0);
    }

    #[test]
    fn test_ties_count_as_at_or_below() {
        let pool = PercentileRank::new([5.0, 5.0, 5.0, 10.0]);
        assert_eq!(pool.rank(Some(5.0)).value(), 0.75);
        assert_eq!(pool.rank(Some(10.0)).value(), 1.0);
    }

    #[test]
    fn test_values_outside_pool() {
        let pool = PercentileRank::new([10.0, 20.0]);
        assert_eq!(pool.rank(Some(0.0)).value(), 0.0);
        assert_eq!(pool.rank(Some(100.0)).value(), 1.0);
    }

    #[test]
    fn test_rank_is_monotonic() {
        let pool = PercentileRank::new([3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
        let probes = [-1.0, 0.0, 1.0, 1.5, 2.0, 3.0, 4.5, 6.0, 8.0, 9.0, 12.0];
        for pair in probes.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(pool.rank(Some(a)).value() <= pool.rank(Some(b)).value());
        }
    }

    #[test]
    fn test_non_finite_pool_entries_are_ignored() {
        let pool = PercentileRank::new([f64::NAN, 1.0, f64::INFINITY, 2.0]);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.rank(Some(1.0)).value(), 0.5);
    }
}
