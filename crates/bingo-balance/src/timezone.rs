use std::collections::HashMap;

use bingo_stats::normalized::Normalized;

/// Overlap of each known timezone with the clan's peak activity hours, in `[0, 1]`.
const BUILTIN_SCORES: &[(&str, f64)] = &[
    ("America/New_York", 1.0),
    ("America/Toronto", 1.0),
    ("America/Chicago", 0.95),
    ("America/Denver", 0.85),
    ("America/Phoenix", 0.85),
    ("America/Los_Angeles", 0.8),
    ("America/Vancouver", 0.8),
    ("America/Sao_Paulo", 0.75),
    ("Europe/London", 0.9),
    ("Europe/Dublin", 0.9),
    ("Europe/Lisbon", 0.85),
    ("Europe/Amsterdam", 0.8),
    ("Europe/Brussels", 0.8),
    ("Europe/Berlin", 0.8),
    ("Europe/Paris", 0.8),
    ("Europe/Stockholm", 0.8),
    ("Europe/Oslo", 0.8),
    ("Europe/Helsinki", 0.7),
    ("UTC", 0.7),
    ("Asia/Manila", 0.35),
    ("Asia/Singapore", 0.3),
    ("Asia/Tokyo", 0.3),
    ("Australia/Perth", 0.3),
    ("Australia/Brisbane", 0.4),
    ("Australia/Sydney", 0.4),
    ("Australia/Melbourne", 0.4),
    ("Pacific/Auckland", 0.35),
];

/// Timezone-to-score lookup.
///
/// [`TimezoneTable::default`] holds the built-in table. Unknown identifiers have
/// no score and normalize to neutral.
///
/// ```
/// use bingo_balance::timezone::TimezoneTable;
///
/// let table = TimezoneTable::default();
/// assert_eq!(table.score(Some("Europe/London")).value(), 0.9);
/// assert_eq!(table.score(Some("Mars/Olympus_Mons")).value(), 0.5);
/// assert_eq!(table.score(None).value(), 0.5);
///
/// let custom = TimezoneTable::new([("Europe/London", 0.2)]);
/// assert_eq!(custom.score(Some("Europe/London")).value(), 0.2);
/// ```
#[derive(Debug, Clone)]
pub struct TimezoneTable {
    scores: HashMap<String, f64>,
}

impl Default for TimezoneTable {
    fn default() -> Self {
        Self::new(BUILTIN_SCORES.iter().copied())
    }
}

impl TimezoneTable {
    /// Builds a table from `(identifier, score)` pairs. Scores are clamped to `[0, 1]`.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let scores = entries
            .into_iter()
            .filter(|(_, score)| score.is_finite())
            .map(|(tz, score)| (tz.into(), score.clamp(0.0, 1.0)))
            .collect();
        Self { scores }
    }

    #[must_use]
    pub fn score(&self, timezone: Option<&str>) -> Normalized {
        timezone
            .and_then(|tz| self.scores.get(tz.trim()))
            .copied()
            .into()
    }
}
