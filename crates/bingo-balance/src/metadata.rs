use bingo_engine::UserId;
use serde::{Deserialize, Serialize};

/// Self-reported skill tier.
///
/// Parsing is case-insensitive on the variant name.
///
/// ```
/// use bingo_balance::SkillLevel;
///
/// assert_eq!("advanced".parse::<SkillLevel>().ok(), Some(SkillLevel::Advanced));
/// assert_eq!(SkillLevel::Intermediate.score(), 0.5);
/// assert!("godlike".parse::<SkillLevel>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    #[display("beginner")]
    Beginner,
    #[display("intermediate")]
    Intermediate,
    #[display("advanced")]
    Advanced,
    #[display("expert")]
    Expert,
}

impl SkillLevel {
    #[must_use]
    pub fn score(self) -> f64 {
        match self {
            Self::Beginner => 0.25,
            Self::Intermediate => 0.5,
            Self::Advanced => 0.75,
            Self::Expert => 1.0,
        }
    }
}

/// Balancing attributes a player filled in. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerMetadata {
    /// Efficient hours played (skilling).
    #[serde(default)]
    pub ehp: Option<f64>,
    /// Efficient hours bossed.
    #[serde(default)]
    pub ehb: Option<f64>,
    /// IANA identifier, e.g. `America/New_York`.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub daily_hours_available: Option<f64>,
    /// Kept as free text; values that do not parse as a [`SkillLevel`] score neutral.
    #[serde(default)]
    pub skill_level: Option<String>,
}

impl PlayerMetadata {
    #[must_use]
    pub fn skill(&self) -> Option<SkillLevel> {
        self.skill_level.as_deref()?.trim().parse().ok()
    }
}

/// A registered participant who may be drafted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub user_id: UserId,
    #[serde(default)]
    pub name: String,
    /// `None` when the player never filled in the form.
    #[serde(default)]
    pub metadata: Option<PlayerMetadata>,
    /// Already on a team; never drafted again.
    #[serde(default)]
    pub assigned: bool,
}
