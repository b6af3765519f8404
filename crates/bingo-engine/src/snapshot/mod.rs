//! Consistent read snapshots of an event.
//!
//! Every evaluation in one scoring pass reads from a single [`EventSnapshot`], so
//! submissions approved mid-pass can never be half-counted. The snapshot is
//! immutable once built and can be shared across worker threads by reference.
//!
//! # Example
//!
//! ```
//! use bingo_engine::{EventSnapshot, GoalId, TeamId};
//!
//! let snapshot: EventSnapshot = serde_json::from_str(
//!     r#"{ "progress": [{ "team_id": 1, "goal_id": 4, "current_value": 12.5 }] }"#,
//! )
//! .unwrap();
//! let progress = snapshot.progress_lookup();
//! assert_eq!(progress.get(TeamId(1), GoalId(4)), 12.5);
//! assert_eq!(progress.get(TeamId(2), GoalId(4)), 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::{Board, Goal, GoalGroup, Team, TeamGoalProgress, TeamTileSubmission, Tile, TileId};

pub use self::lookup::*;

mod lookup;

/// All records needed to score one event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub goal_groups: Vec<GoalGroup>,
    #[serde(default)]
    pub progress: Vec<TeamGoalProgress>,
    #[serde(default)]
    pub tile_submissions: Vec<TeamTileSubmission>,
}

impl EventSnapshot {
    /// Finds a tile and the board it belongs to.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<(&Board, &Tile)> {
        self.boards
            .iter()
            .find_map(|board| board.tiles.iter().find(|t| t.id == id).map(|t| (board, t)))
    }

    /// Goals of a tile, at any depth of its group hierarchy.
    pub fn goals_for_tile(&self, tile_id: TileId) -> impl Iterator<Item = &Goal> {
        self.goals.iter().filter(move |g| g.tile_id == tile_id)
    }

    /// Goal groups attached to a tile at any depth.
    pub fn groups_for_tile(&self, tile_id: TileId) -> impl Iterator<Item = &GoalGroup> {
        self.goal_groups
            .iter()
            .filter(move |g| g.tile_id == tile_id)
    }

    #[must_use]
    pub fn progress_lookup(&self) -> ProgressLookup {
        ProgressLookup::new(&self.progress)
    }

    #[must_use]
    pub fn submission_lookup(&self) -> SubmissionLookup<'_> {
        SubmissionLookup::new(&self.tile_submissions)
    }
}
