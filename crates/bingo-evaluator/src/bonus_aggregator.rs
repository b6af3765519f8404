//! Event-wide aggregation of base and bonus experience.
//!
//! Per board, the maximum possible bonus is the sum of every configured pattern
//! bonus that applies to the board's shape:
//!
//! ```text
//! max = Σ row bonuses + Σ column bonuses + diagonal bonuses (square only) + complete-board bonus
//! ```
//!
//! Boards whose maximum is zero have nothing to report and are left out of the
//! per-board summaries. Every board still contributes base experience to team totals.
//!
//! # Rounding
//!
//! - Base XP on a board: `round(Σ weight of approved tiles)`
//! - Completion percentage: `round(100 × achieved / max)`, `0` when `max` is `0`

use bingo_engine::{Board, BoardId, TeamId};
use serde::Serialize;

use crate::pattern_evaluator::{
    PatternCompletion, TileApprovals, configured_patterns, evaluate_patterns,
};

/// Maximum bonus a team could earn on `board`.
#[must_use]
pub fn max_possible_bonus(board: &Board) -> u64 {
    configured_patterns(board)
        .iter()
        .map(|p| u64::from(p.bonus))
        .sum()
}

/// Rounded percentage of `max` achieved; `0` when nothing was possible.
///
/// # Example
///
/// ```
/// use bingo_evaluator::bonus_aggregator::completion_percentage;
///
/// assert_eq!(completion_percentage(15, 50), 30);
/// assert_eq!(completion_percentage(1, 3), 33);
/// assert_eq!(completion_percentage(2, 3), 67);
/// assert_eq!(completion_percentage(10, 0), 0);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn completion_percentage(achieved: u64, max: u64) -> u32 {
    if max == 0 {
        return 0;
    }
    (100.0 * achieved as f64 / max as f64).round() as u32
}

/// Everything one team earned on one board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardTeamScore {
    pub board_id: BoardId,
    pub team_id: TeamId,
    /// Tiles with an approved submission.
    pub approved_tiles: usize,
    /// Rounded sum of approved tile weights.
    pub base_xp: u64,
    pub patterns: PatternCompletion,
}

impl BoardTeamScore {
    /// Scores `team` on `board`: approved tiles, base XP and completed patterns.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn evaluate<A>(board: &Board, team: TeamId, approvals: &A) -> Self
    where
        A: TileApprovals + ?Sized,
    {
        let approved = board
            .tiles
            .iter()
            .filter(|tile| approvals.is_approved(team, tile.id))
            .collect::<Vec<_>>();
        let weight = approved.iter().map(|tile| tile.weight).sum::<f64>();
        Self {
            board_id: board.id,
            team_id: team,
            approved_tiles: approved.len(),
            base_xp: weight.round().max(0.0) as u64,
            patterns: evaluate_patterns(board, team, approvals),
        }
    }

    #[must_use]
    pub fn bonus_xp(&self) -> u64 {
        self.patterns.total_bonus_xp
    }
}

/// One team's bonus standing on one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamBoardBonus {
    pub team_id: TeamId,
    pub base_xp: u64,
    pub bonus_xp: u64,
    pub completion_percentage: u32,
}

/// Bonus standings of every team on one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardBonusSummary {
    pub board_id: BoardId,
    pub board_name: String,
    pub max_possible_bonus: u64,
    pub teams: Vec<TeamBoardBonus>,
}

/// One team's totals across every board of the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamBonusTotals {
    pub team_id: TeamId,
    pub approved_tiles: usize,
    pub base_xp: u64,
    pub bonus_xp: u64,
    pub max_possible_bonus: u64,
    pub completion_percentage: u32,
}

impl TeamBonusTotals {
    #[must_use]
    pub fn total_xp(&self) -> u64 {
        self.base_xp + self.bonus_xp
    }
}

/// Bonus figures for a whole event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventBonusReport {
    /// Boards with a non-zero maximum bonus, in input order.
    pub boards: Vec<BoardBonusSummary>,
    /// Team totals, in input team order.
    pub teams: Vec<TeamBonusTotals>,
}

/// Combines per-(board, team) scores into per-board summaries and team totals.
///
/// `scores` may be in any order; pairs without a score count as zero.
#[must_use]
pub fn aggregate_bonuses(
    boards: &[Board],
    teams: &[TeamId],
    scores: &[BoardTeamScore],
) -> EventBonusReport {
    let score_of = |board: BoardId, team: TeamId| {
        scores
            .iter()
            .find(|s| s.board_id == board && s.team_id == team)
    };

    let mut summaries = vec![];
    let mut total_max = 0;
    for board in boards {
        let max_possible_bonus = max_possible_bonus(board);
        if max_possible_bonus == 0 {
            tracing::debug!(board = %board.id, "board has no configured bonus, skipping");
            continue;
        }
        total_max += max_possible_bonus;
        let teams = teams
            .iter()
            .map(|&team_id| {
                let (base_xp, bonus_xp) =
                    score_of(board.id, team_id).map_or((0, 0), |s| (s.base_xp, s.bonus_xp()));
                TeamBoardBonus {
                    team_id,
                    base_xp,
                    bonus_xp,
                    completion_percentage: completion_percentage(bonus_xp, max_possible_bonus),
                }
            })
            .collect();
        summaries.push(BoardBonusSummary {
            board_id: board.id,
            board_name: board.name.clone(),
            max_possible_bonus,
            teams,
        });
    }

    let totals = teams
        .iter()
        .map(|&team_id| {
            let team_scores = boards
                .iter()
                .filter_map(|board| score_of(board.id, team_id))
                .collect::<Vec<_>>();
            let bonus_xp = team_scores.iter().map(|s| s.bonus_xp()).sum();
            TeamBonusTotals {
                team_id,
                approved_tiles: team_scores.iter().map(|s| s.approved_tiles).sum(),
                base_xp: team_scores.iter().map(|s| s.base_xp).sum(),
                bonus_xp,
                max_possible_bonus: total_max,
                completion_percentage: completion_percentage(bonus_xp, total_max),
            }
        })
        .collect();

    EventBonusReport {
        boards: summaries,
        teams: totals,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bingo_engine::{BoardKind, PatternBonusConfig, Tile, TileId};

    use super::*;

    struct Approved(HashSet<(TeamId, TileId)>);

    impl TileApprovals for Approved {
        fn is_approved(&self, team: TeamId, tile: TileId) -> bool {
            self.0.contains(&(team, tile))
        }
    }

    fn board(id: u64, rows: usize, columns: usize, bonus: PatternBonusConfig) -> Board {
        Board {
            id: BoardId(id),
            name: format!("board {id}"),
            kind: BoardKind::Standard,
            rows,
            columns,
            tiles: (0..rows * columns)
                .map(|index| Tile {
                    id: TileId(id * 100 + u64::try_from(index).unwrap()),
                    index,
                    weight: 2.5,
                    name: String::new(),
                })
                .collect(),
            bonus,
        }
    }

    fn rows_and_columns() -> PatternBonusConfig {
        PatternBonusConfig {
            row_bonuses: vec![10, 10],
            column_bonuses: vec![5, 5],
            main_diagonal_bonus: Some(99),
            complete_board_bonus: Some(20),
            ..PatternBonusConfig::default()
        }
    }

    #[test]
    fn test_max_possible_bonus_excludes_diagonals_on_non_square() {
        assert_eq!(max_possible_bonus(&board(1, 2, 3, rows_and_columns())), 50);
        assert_eq!(max_possible_bonus(&board(1, 2, 2, rows_and_columns())), 149);
    }

    #[test]
    fn test_progression_board_has_no_bonus() {
        let mut progression = board(1, 2, 3, rows_and_columns());
        progression.kind = BoardKind::Progression;
        assert_eq!(max_possible_bonus(&progression), 0);
    }

    #[test]
    fn test_row_and_column_scores_thirty_percent() {
        let board = board(1, 2, 3, rows_and_columns());
        let team = TeamId(1);
        // row 0 = {0, 1, 2}, column 1 = {1, 4}
        let approvals = Approved(
            [0, 1, 2, 4]
                .into_iter()
                .map(|i| (team, TileId(100 + i)))
                .collect(),
        );
        let score = BoardTeamScore::evaluate(&board, team, &approvals);
        assert_eq!(score.bonus_xp(), 15);
        assert_eq!(score.approved_tiles, 4);
        assert_eq!(score.base_xp, 10);

        let report = aggregate_bonuses(std::slice::from_ref(&board), &[team], &[score]);
        assert_eq!(report.boards[0].max_possible_bonus, 50);
        assert_eq!(report.boards[0].teams[0].completion_percentage, 30);
        assert_eq!(report.teams[0].completion_percentage, 30);
        assert_eq!(report.teams[0].total_xp(), 25);
    }

    #[test]
    fn test_base_xp_is_rounded() {
        let board = board(1, 1, 3, PatternBonusConfig::default());
        let team = TeamId(1);
        // 3 × 2.5 = 7.5 rounds half away from zero
        let approvals = Approved((100..103).map(|t| (team, TileId(t))).collect());
        assert_eq!(BoardTeamScore::evaluate(&board, team, &approvals).base_xp, 8);
    }

    #[test]
    fn test_zero_bonus_board_is_skipped_but_counts_base() {
        let plain = board(1, 1, 2, PatternBonusConfig::default());
        let bonus = board(
            2,
            1,
            2,
            PatternBonusConfig {
                row_bonuses: vec![40],
                ..PatternBonusConfig::default()
            },
        );
        let team = TeamId(3);
        let approvals = Approved(
            [100, 101, 200]
                .into_iter()
                .map(|t| (team, TileId(t)))
                .collect(),
        );
        let boards = [plain, bonus];
        let scores = boards
            .iter()
            .map(|b| BoardTeamScore::evaluate(b, team, &approvals))
            .collect::<Vec<_>>();

        let report = aggregate_bonuses(&boards, &[team], &scores);
        assert_eq!(report.boards.len(), 1);
        assert_eq!(report.boards[0].board_id, BoardId(2));
        assert_eq!(report.teams[0].base_xp, 8);
        assert_eq!(report.teams[0].bonus_xp, 0);
        assert_eq!(report.teams[0].max_possible_bonus, 40);
    }

    #[test]
    fn test_missing_score_counts_as_zero() {
        let board = board(1, 1, 1, PatternBonusConfig {
            complete_board_bonus: Some(5),
            ..PatternBonusConfig::default()
        });
        let report = aggregate_bonuses(&[board], &[TeamId(1)], &[]);
        assert_eq!(report.boards[0].teams[0].bonus_xp, 0);
        assert_eq!(report.teams[0].completion_percentage, 0);
    }
}
