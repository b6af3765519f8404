//! Composite player score for team balancing.
//!
//! Each attribute is normalized onto `[0, 1]` and combined as a weighted average:
//!
//! ```text
//! composite = Σ wᵢ·vᵢ / Σ wᵢ
//! ```
//!
//! | Attribute       | Normalization                                   |
//! |-----------------|-------------------------------------------------|
//! | EHP, EHB        | percentile rank within the candidate pool       |
//! | daily hours     | percentile rank within the candidate pool       |
//! | timezone        | [`TimezoneTable`] lookup                        |
//! | skill level     | [`SkillLevel::score`]                           |
//!
//! Anything missing or unknown scores the neutral `0.5`, including every
//! attribute of a candidate with no metadata at all.

use bingo_engine::UserId;
use bingo_stats::{
    normalized::{NEUTRAL_SCORE, Normalized},
    percentiles::PercentileRank,
};
use serde::Serialize;

use crate::{
    metadata::{Candidate, PlayerMetadata, SkillLevel},
    timezone::TimezoneTable,
    weights::BalancingWeights,
};

/// Normalized value of each attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub ehp: f64,
    pub ehb: f64,
    pub timezone: f64,
    pub daily_hours: f64,
    pub skill_level: f64,
}

impl ScoreBreakdown {
    pub const NEUTRAL: Self = Self {
        ehp: NEUTRAL_SCORE,
        ehb: NEUTRAL_SCORE,
        timezone: NEUTRAL_SCORE,
        daily_hours: NEUTRAL_SCORE,
        skill_level: NEUTRAL_SCORE,
    };

    fn as_array(&self) -> [f64; 5] {
        [
            self.ehp,
            self.ehb,
            self.timezone,
            self.daily_hours,
            self.skill_level,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerScore {
    pub user_id: UserId,
    pub composite: f64,
    pub breakdown: ScoreBreakdown,
}

/// Comparison pools for the percentile-ranked attributes.
#[derive(Debug, Clone, Default)]
pub struct AttributePools {
    ehp: PercentileRank,
    ehb: PercentileRank,
    daily_hours: PercentileRank,
}

impl AttributePools {
    /// Collects the non-missing values of each attribute.
    pub fn new<'a, I>(metadata: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a PlayerMetadata>>,
    {
        let present = metadata.into_iter().flatten().collect::<Vec<_>>();
        Self {
            ehp: PercentileRank::from_optional(present.iter().map(|m| m.ehp)),
            ehb: PercentileRank::from_optional(present.iter().map(|m| m.ehb)),
            daily_hours: PercentileRank::from_optional(
                present.iter().map(|m| m.daily_hours_available),
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompositeScorer {
    weights: BalancingWeights,
    timezones: TimezoneTable,
}

impl CompositeScorer {
    #[must_use]
    pub fn new(weights: BalancingWeights, timezones: TimezoneTable) -> Self {
        Self { weights, timezones }
    }

    #[must_use]
    pub fn weights(&self) -> &BalancingWeights {
        &self.weights
    }

    /// Normalizes every attribute of one player against `pools`.
    #[must_use]
    pub fn breakdown(
        &self,
        pools: &AttributePools,
        metadata: Option<&PlayerMetadata>,
    ) -> ScoreBreakdown {
        let Some(m) = metadata else {
            return ScoreBreakdown::NEUTRAL;
        };
        ScoreBreakdown {
            ehp: pools.ehp.rank(m.ehp).value(),
            ehb: pools.ehb.rank(m.ehb).value(),
            timezone: self.timezones.score(m.timezone.as_deref()).value(),
            daily_hours: pools.daily_hours.rank(m.daily_hours_available).value(),
            skill_level: Normalized::from(m.skill().map(SkillLevel::score)).value(),
        }
    }

    /// Weighted average of a breakdown, clamped to `[0, 1]`.
    ///
    /// Neutral when the weights do not sum to a finite positive number.
    ///
    /// ```
    /// use bingo_balance::composite::{CompositeScorer, ScoreBreakdown};
    ///
    /// let scorer = CompositeScorer::default();
    /// assert_eq!(scorer.composite(&ScoreBreakdown::NEUTRAL), 0.5);
    /// ```
    #[must_use]
    pub fn composite(&self, breakdown: &ScoreBreakdown) -> f64 {
        let total = self.weights.sum();
        if total <= 0.0 || !total.is_finite() {
            return NEUTRAL_SCORE;
        }
        let weighted = self
            .weights
            .as_array()
            .iter()
            .zip(breakdown.as_array())
            .map(|(w, v)| w * v)
            .sum::<f64>();
        Normalized::score(weighted / total).value()
    }

    /// Scores every candidate against a pool made of exactly these candidates.
    #[must_use]
    pub fn score_pool(&self, candidates: &[&Candidate]) -> Vec<PlayerScore> {
        let pools = AttributePools::new(candidates.iter().map(|c| c.metadata.as_ref()));
        candidates
            .iter()
            .map(|c| {
                let breakdown = self.breakdown(&pools, c.metadata.as_ref());
                PlayerScore {
                    user_id: c.user_id,
                    composite: self.composite(&breakdown),
                    breakdown,
                }
            })
            .collect()
    }
}
