//! One full scoring pass over an event snapshot.
//!
//! Teams share no write state, so each team is evaluated on its own scoped
//! thread. All workers borrow the same [`EventSnapshot`] and the lookups built
//! from it once, up front.

use std::thread;

use bingo_engine::{BoardId, EventSnapshot, TeamId, TileId};
use serde::Serialize;

use crate::{
    bonus_aggregator::{BoardTeamScore, EventBonusReport, aggregate_bonuses},
    contribution::{ContributionScorer, TeamContributions},
    goal_tree::{GoalTree, TileGoalReport},
    leaderboard::{LeaderboardEntry, rank_teams},
};

/// A board that failed structural validation. It is still scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardIssue {
    pub board_id: BoardId,
    pub message: String,
}

/// Result of a scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventScore {
    pub event_name: String,
    pub board_issues: Vec<BoardIssue>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub bonus: EventBonusReport,
    /// Per (board, team) detail, grouped by team.
    pub scores: Vec<BoardTeamScore>,
    pub contributions: Vec<TeamContributions>,
}

#[derive(Debug)]
struct TeamEvaluation {
    team_id: TeamId,
    scores: Vec<BoardTeamScore>,
    contributions: Option<TeamContributions>,
}

/// Scores an event snapshot.
///
/// # Example
///
/// ```
/// use bingo_engine::EventSnapshot;
/// use bingo_evaluator::scoring_pass::ScoringPass;
///
/// let snapshot: EventSnapshot = serde_json::from_str(
///     r#"{
///         "name": "Summer Bingo",
///         "boards": [{
///             "id": 1, "rows": 1, "columns": 2,
///             "tiles": [{ "id": 10, "index": 0, "weight": 20 }, { "id": 11, "index": 1, "weight": 5 }],
///             "bonus": { "row_bonuses": [15] }
///         }],
///         "teams": [{ "id": 1, "name": "Red" }, { "id": 2, "name": "Blue" }],
///         "tile_submissions": [
///             { "team_id": 2, "tile_id": 10, "status": "approved", "submissions": [] },
///             { "team_id": 2, "tile_id": 11, "status": "approved", "submissions": [] },
///             { "team_id": 1, "tile_id": 10, "status": "approved", "submissions": [] }
///         ]
///     }"#,
/// )
/// .unwrap();
///
/// let score = ScoringPass::new(&snapshot).run();
/// assert_eq!(score.leaderboard[0].team_name, "Blue");
/// assert_eq!(score.leaderboard[0].total_xp, 40);
/// assert_eq!(score.leaderboard[1].total_xp, 20);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScoringPass<'a> {
    snapshot: &'a EventSnapshot,
}

impl<'a> ScoringPass<'a> {
    #[must_use]
    pub fn new(snapshot: &'a EventSnapshot) -> Self {
        Self { snapshot }
    }

    /// Teams to score: every listed team, then any team that only appears in
    /// submission records.
    #[must_use]
    pub fn team_ids(&self) -> Vec<TeamId> {
        let mut ids = self.snapshot.teams.iter().map(|t| t.id).collect::<Vec<_>>();
        for tts in &self.snapshot.tile_submissions {
            if !ids.contains(&tts.team_id) {
                tracing::debug!(team = %tts.team_id, "team has submissions but no team record");
                ids.push(tts.team_id);
            }
        }
        ids
    }

    /// Validates every board. Failures are logged and returned, never fatal.
    #[must_use]
    pub fn board_issues(&self) -> Vec<BoardIssue> {
        self.snapshot
            .boards
            .iter()
            .filter_map(|board| {
                let err = board.validate().err()?;
                tracing::warn!(board = %board.id, "{err}");
                Some(BoardIssue {
                    board_id: board.id,
                    message: err.to_string(),
                })
            })
            .collect()
    }

    /// Runs patterns, bonuses, contributions and the leaderboard for every team.
    #[must_use]
    pub fn run(&self) -> EventScore {
        let snapshot = self.snapshot;
        let board_issues = self.board_issues();
        let team_ids = self.team_ids();

        let approvals = snapshot.submission_lookup();
        let contributions = ContributionScorer::new(snapshot);
        let mut evaluations = team_ids
            .iter()
            .map(|&team_id| TeamEvaluation {
                team_id,
                scores: vec![],
                contributions: None,
            })
            .collect::<Vec<_>>();

        thread::scope(|s| {
            let approvals = &approvals;
            let contributions = &contributions;
            for evaluation in &mut evaluations {
                s.spawn(move || {
                    let team = evaluation.team_id;
                    tracing::debug!(%team, "scoring team");
                    evaluation.scores = snapshot
                        .boards
                        .iter()
                        .map(|board| BoardTeamScore::evaluate(board, team, approvals))
                        .collect();
                    evaluation.contributions = Some(contributions.score_team(team));
                });
            }
        });

        let mut scores = vec![];
        let mut team_contributions = vec![];
        for evaluation in evaluations {
            scores.extend(evaluation.scores);
            team_contributions.extend(evaluation.contributions);
        }

        let bonus = aggregate_bonuses(&snapshot.boards, &team_ids, &scores);
        let leaderboard = rank_teams(&snapshot.teams, &bonus.teams);
        tracing::debug!(
            teams = team_ids.len(),
            boards = snapshot.boards.len(),
            "scoring pass finished"
        );

        EventScore {
            event_name: snapshot.name.clone(),
            board_issues,
            leaderboard,
            bonus,
            scores,
            contributions: team_contributions,
        }
    }

    /// Goal reports of `team` for one tile, or for every tile that has goals.
    ///
    /// A tile asked for explicitly is reported even if it has no goals.
    #[must_use]
    pub fn goal_reports(&self, team: TeamId, tile: Option<TileId>) -> Vec<TileGoalReport> {
        let snapshot = self.snapshot;
        let progress = snapshot.progress_lookup();
        let tree = |tile_id| {
            GoalTree::new(
                tile_id,
                snapshot.goals_for_tile(tile_id),
                snapshot.groups_for_tile(tile_id),
            )
        };

        if let Some(tile_id) = tile {
            return vec![tree(tile_id).report(team, &progress)];
        }
        snapshot
            .boards
            .iter()
            .flat_map(|board| &board.tiles)
            .map(|t| tree(t.id))
            .filter(|tree| !tree.is_empty())
            .map(|tree| tree.report(team, &progress))
            .collect()
    }
}
