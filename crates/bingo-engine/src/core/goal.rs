use serde::{Deserialize, Serialize};

use crate::{GoalId, GroupId, TeamId, TileId};

/// How a goal group combines the completion of its children.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    /// Every child must be complete.
    #[default]
    #[display("AND")]
    And,
    /// At least `min_required_goals` children must be complete.
    #[display("OR")]
    Or,
}

/// A quantitative target attached to a tile, directly or through a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub tile_id: TileId,
    /// Enclosing group; `None` for goals attached directly to the tile.
    #[serde(default)]
    pub parent_group_id: Option<GroupId>,
    /// Progress value a team must reach. Non-positive targets never complete.
    pub target_value: f64,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub description: String,
}

/// A logical container of goals and nested groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalGroup {
    pub id: GroupId,
    pub tile_id: TileId,
    #[serde(default)]
    pub parent_group_id: Option<GroupId>,
    #[serde(default)]
    pub logical_operator: LogicalOperator,
    /// Children that must be complete under [`LogicalOperator::Or`].
    #[serde(default = "default_min_required_goals")]
    pub min_required_goals: u32,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub name: String,
}

fn default_min_required_goals() -> u32 {
    1
}

/// A team's accumulated progress value toward one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGoalProgress {
    pub team_id: TeamId,
    pub goal_id: GoalId,
    pub current_value: f64,
}
