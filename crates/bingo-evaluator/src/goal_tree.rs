//! Recursive evaluation of goal-group trees.
//!
//! Goals and goal groups arrive as flat records tagged with a nullable
//! `parent_group_id`. [`GoalTree`] rebuilds the hierarchy as an arena: the records
//! are kept in two vectors and a children-by-parent index maps each parent id
//! (`None` for the tile itself) to its children in ascending `order_index`.
//!
//! # Evaluation Rules
//!
//! Evaluation is post-order (children before parents):
//!
//! - **Goal**: complete iff progress ≥ target (see [`goal_evaluator`](crate::goal_evaluator))
//! - **AND group**: complete iff every child is complete
//! - **OR group**: complete iff at least `min_required_goals` children are complete
//! - **Empty group**: never complete, under either operator
//!
//! Every node also reports `completed_count / total_count` over the leaf goals
//! beneath it. Groups themselves are not counted. The tally is for progress
//! displays only and plays no part in the logical result.
//!
//! # Example
//!
//! ```
//! use bingo_engine::{Goal, GoalGroup, GoalId, GroupId, LogicalOperator, TileId};
//! use bingo_evaluator::goal_tree::GoalTree;
//!
//! let tile = TileId(1);
//! let group = GoalGroup {
//!     id: GroupId(10),
//!     tile_id: tile,
//!     parent_group_id: None,
//!     logical_operator: LogicalOperator::Or,
//!     min_required_goals: 1,
//!     order_index: 0,
//!     name: "Any pet".to_owned(),
//! };
//! let goals = [1, 2].map(|id| Goal {
//!     id: GoalId(id),
//!     tile_id: tile,
//!     parent_group_id: Some(GroupId(10)),
//!     target_value: 1.0,
//!     order_index: 0,
//!     description: String::new(),
//! });
//!
//! let tree = GoalTree::new(tile, &goals, [&group]);
//! let nodes = tree.evaluate(|goal| if goal == GoalId(2) { 1.0 } else { 0.0 });
//! assert!(nodes[0].is_complete());
//! assert_eq!((nodes[0].completed_count(), nodes[0].total_count()), (1, 2));
//! ```

use std::collections::{HashMap, HashSet};

use bingo_engine::{
    Goal, GoalGroup, GoalId, GroupId, LogicalOperator, ProgressLookup, TeamId, TileId,
};
use serde::Serialize;

use crate::goal_evaluator::{GoalCompletion, evaluate_goal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeRef {
    Goal(usize),
    Group(usize),
}

/// Arena representation of the goal hierarchy of one tile.
#[derive(Debug, Clone)]
pub struct GoalTree<'a> {
    tile_id: TileId,
    goals: Vec<&'a Goal>,
    groups: Vec<&'a GoalGroup>,
    children: HashMap<Option<GroupId>, Vec<NodeRef>>,
}

impl<'a> GoalTree<'a> {
    /// Builds the tree for `tile_id` from flat goal and group records.
    ///
    /// Records belonging to other tiles are ignored, so callers may pass every
    /// record of an event. Nodes whose parent group does not exist are unreachable
    /// and never evaluated.
    pub fn new<G, R>(tile_id: TileId, goals: G, groups: R) -> Self
    where
        G: IntoIterator<Item = &'a Goal>,
        R: IntoIterator<Item = &'a GoalGroup>,
    {
        let goals = goals
            .into_iter()
            .filter(|g| g.tile_id == tile_id)
            .collect::<Vec<_>>();
        let groups = groups
            .into_iter()
            .filter(|g| g.tile_id == tile_id)
            .collect::<Vec<_>>();

        let mut children: HashMap<Option<GroupId>, Vec<NodeRef>> = HashMap::new();
        for (i, goal) in goals.iter().enumerate() {
            children
                .entry(goal.parent_group_id)
                .or_default()
                .push(NodeRef::Goal(i));
        }
        for (i, group) in groups.iter().enumerate() {
            children
                .entry(group.parent_group_id)
                .or_default()
                .push(NodeRef::Group(i));
        }
        // stable: equal order_index keeps goals-then-groups insertion order
        for siblings in children.values_mut() {
            siblings.sort_by_key(|node| match *node {
                NodeRef::Goal(i) => goals[i].order_index,
                NodeRef::Group(i) => groups[i].order_index,
            });
        }

        Self {
            tile_id,
            goals,
            groups,
            children,
        }
    }

    #[must_use]
    pub fn tile_id(&self) -> TileId {
        self.tile_id
    }

    /// Returns `true` if the tile has no goals or groups at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty() && self.groups.is_empty()
    }

    /// Evaluates every top-level node of the tile.
    ///
    /// `progress` returns the team's current value for a goal (0 when there is
    /// none). Evaluation has no side effects; identical inputs always produce
    /// identical output.
    pub fn evaluate<F>(&self, progress: F) -> Vec<EvaluatedNode>
    where
        F: Fn(GoalId) -> f64,
    {
        let mut path = HashSet::new();
        self.evaluate_children(None, &progress, &mut path)
    }

    /// Evaluates the tree for a team and summarizes it at tile level.
    #[must_use]
    pub fn report(&self, team_id: TeamId, progress: &ProgressLookup) -> TileGoalReport {
        let nodes = self.evaluate(|goal| progress.get(team_id, goal));
        TileGoalReport::new(self.tile_id, team_id, nodes)
    }

    fn evaluate_children<F>(
        &self,
        parent: Option<GroupId>,
        progress: &F,
        path: &mut HashSet<GroupId>,
    ) -> Vec<EvaluatedNode>
    where
        F: Fn(GoalId) -> f64,
    {
        let Some(siblings) = self.children.get(&parent) else {
            return vec![];
        };
        siblings
            .iter()
            .map(|node| match *node {
                NodeRef::Goal(i) => EvaluatedNode::Goal(evaluate_leaf(self.goals[i], progress)),
                NodeRef::Group(i) => {
                    EvaluatedNode::Group(self.evaluate_group(self.groups[i], progress, path))
                }
            })
            .collect()
    }

    fn evaluate_group<F>(
        &self,
        group: &GoalGroup,
        progress: &F,
        path: &mut HashSet<GroupId>,
    ) -> EvaluatedGroup
    where
        F: Fn(GoalId) -> f64,
    {
        let children = if path.insert(group.id) {
            let children = self.evaluate_children(Some(group.id), progress, path);
            path.remove(&group.id);
            children
        } else {
            tracing::warn!(
                tile = %self.tile_id,
                group = %group.id,
                "goal group is its own ancestor, treating as empty"
            );
            vec![]
        };

        let completed_children = children.iter().filter(|c| c.is_complete()).count();
        let complete = !children.is_empty()
            && match group.logical_operator {
                LogicalOperator::And => completed_children == children.len(),
                LogicalOperator::Or => {
                    // zero threshold is read as one
                    let required = usize::try_from(group.min_required_goals.max(1))
                        .unwrap_or(usize::MAX);
                    completed_children >= required
                }
            };

        EvaluatedGroup {
            group_id: group.id,
            order_index: group.order_index,
            name: group.name.clone(),
            logical_operator: group.logical_operator,
            min_required_goals: group.min_required_goals,
            complete,
            completed_children,
            completed_count: children.iter().map(EvaluatedNode::completed_count).sum(),
            total_count: children.iter().map(EvaluatedNode::total_count).sum(),
            children,
        }
    }
}

fn evaluate_leaf<F>(goal: &Goal, progress: &F) -> EvaluatedGoal
where
    F: Fn(GoalId) -> f64,
{
    EvaluatedGoal {
        goal_id: goal.id,
        order_index: goal.order_index,
        description: goal.description.clone(),
        completion: evaluate_goal(goal.target_value, progress(goal.id)),
    }
}

/// An evaluated node of a goal tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EvaluatedNode {
    Goal(EvaluatedGoal),
    Group(EvaluatedGroup),
}

impl EvaluatedNode {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Goal(goal) => goal.completion.complete,
            Self::Group(group) => group.complete,
        }
    }

    /// Number of complete leaf goals at or beneath this node.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        match self {
            Self::Goal(goal) => usize::from(goal.completion.complete),
            Self::Group(group) => group.completed_count,
        }
    }

    /// Number of leaf goals at or beneath this node.
    #[must_use]
    pub fn total_count(&self) -> usize {
        match self {
            Self::Goal(_) => 1,
            Self::Group(group) => group.total_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedGoal {
    pub goal_id: GoalId,
    pub order_index: i32,
    pub description: String,
    pub completion: GoalCompletion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedGroup {
    pub group_id: GroupId,
    pub order_index: i32,
    pub name: String,
    pub logical_operator: LogicalOperator,
    pub min_required_goals: u32,
    pub complete: bool,
    /// Direct children that are complete (what the operator is applied to).
    pub completed_children: usize,
    /// Complete leaf goals beneath this group.
    pub completed_count: usize,
    /// Leaf goals beneath this group.
    pub total_count: usize,
    pub children: Vec<EvaluatedNode>,
}

/// Goal progress of one team on one tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileGoalReport {
    pub tile_id: TileId,
    pub team_id: TeamId,
    /// Every top-level node is complete. A tile without goals is never complete.
    pub all_complete: bool,
    pub completed_count: usize,
    pub total_count: usize,
    /// Share of leaf goals complete, in `[0, 100]`.
    pub percentage: f64,
    pub nodes: Vec<EvaluatedNode>,
}

impl TileGoalReport {
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(tile_id: TileId, team_id: TeamId, nodes: Vec<EvaluatedNode>) -> Self {
        let completed_count = nodes.iter().map(EvaluatedNode::completed_count).sum();
        let total_count = nodes.iter().map(EvaluatedNode::total_count).sum::<usize>();
        let percentage = if total_count == 0 {
            0.0
        } else {
            100.0 * completed_count as f64 / total_count as f64
        };
        Self {
            tile_id,
            team_id,
            all_complete: !nodes.is_empty() && nodes.iter().all(EvaluatedNode::is_complete),
            completed_count,
            total_count,
            percentage,
            nodes,
        }
    }
}
