use bingo_balance::{draft::DraftOutcome, weights::BalancingWeights};
use bingo_engine::TeamId;
use bingo_evaluator::{goal_tree::TileGoalReport, scoring_pass::EventScore};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub score: EventScore,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalsReport {
    pub generated_at: DateTime<Utc>,
    pub event_name: String,
    pub team_id: TeamId,
    pub tiles: Vec<TileGoalReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftReport {
    pub generated_at: DateTime<Utc>,
    pub weights: BalancingWeights,
    #[serde(flatten)]
    pub outcome: DraftOutcome,
}
