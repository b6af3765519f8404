use std::collections::HashMap;

use crate::{GoalId, SubmissionStatus, TeamGoalProgress, TeamId, TeamTileSubmission, TileId};

/// `(team, goal) → progress value` index.
///
/// Goals without a progress row read as `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ProgressLookup {
    values: HashMap<(TeamId, GoalId), f64>,
}

impl ProgressLookup {
    /// Builds the index. If a pair appears twice, the later row wins.
    #[must_use]
    pub fn new(rows: &[TeamGoalProgress]) -> Self {
        let values = rows
            .iter()
            .map(|row| ((row.team_id, row.goal_id), row.current_value))
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn get(&self, team: TeamId, goal: GoalId) -> f64 {
        self.values.get(&(team, goal)).copied().unwrap_or(0.0)
    }
}

/// `(team, tile) → submission` index.
///
/// A missing entry means the team has not submitted for that tile.
#[derive(Debug, Clone, Default)]
pub struct SubmissionLookup<'a> {
    by_key: HashMap<(TeamId, TileId), &'a TeamTileSubmission>,
}

impl<'a> SubmissionLookup<'a> {
    /// Builds the index. If a pair appears twice, the later row wins.
    #[must_use]
    pub fn new(rows: &'a [TeamTileSubmission]) -> Self {
        let mut by_key = HashMap::with_capacity(rows.len());
        for row in rows {
            if by_key.insert((row.team_id, row.tile_id), row).is_some() {
                tracing::warn!(
                    team = %row.team_id,
                    tile = %row.tile_id,
                    "duplicate team tile submission, keeping the later one"
                );
            }
        }
        Self { by_key }
    }

    #[must_use]
    pub fn get(&self, team: TeamId, tile: TileId) -> Option<&'a TeamTileSubmission> {
        self.by_key.get(&(team, tile)).copied()
    }

    #[must_use]
    pub fn status(&self, team: TeamId, tile: TileId) -> Option<SubmissionStatus> {
        self.get(team, tile).map(|s| s.status)
    }

    #[must_use]
    pub fn is_approved(&self, team: TeamId, tile: TileId) -> bool {
        self.status(team, tile).is_some_and(|s| s.is_approved())
    }
}
