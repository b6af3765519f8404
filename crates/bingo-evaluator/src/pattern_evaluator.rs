//! Pattern completion: rows, columns, diagonals and the full board.
//!
//! For one (board, team) pair, every pattern with a configured non-zero bonus is
//! checked in a single pass:
//!
//! 1. Each row `r` in `[0, rows)`
//! 2. Each column `c` in `[0, columns)`
//! 3. Main and anti-diagonal, on square boards only
//! 4. The complete board
//!
//! A pattern is complete when every cell it covers holds a tile the team has an
//! approved submission for. A cell without a tile (the board is shorter than its
//! declared dimensions) makes the pattern incomplete.
//!
//! Only [`BoardKind::Standard`](bingo_engine::BoardKind::Standard) boards award
//! pattern bonuses. Progression boards always yield no patterns and zero bonus.

use bingo_engine::{Board, BoardId, Pattern, SubmissionLookup, TeamId, TileId};
use serde::Serialize;

/// Source of "has this team completed this tile" answers.
///
/// [`SubmissionLookup`] is the usual implementation: a tile is completed when the
/// team's submission for it is approved.
pub trait TileApprovals {
    fn is_approved(&self, team: TeamId, tile: TileId) -> bool;
}

impl TileApprovals for SubmissionLookup<'_> {
    #[inline]
    fn is_approved(&self, team: TeamId, tile: TileId) -> bool {
        SubmissionLookup::is_approved(self, team, tile)
    }
}

/// A completed pattern and the bonus it awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletedPattern {
    pub pattern: Pattern,
    pub bonus: u32,
}

/// Patterns a team has completed on one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternCompletion {
    pub board_id: BoardId,
    pub team_id: TeamId,
    pub rows: Vec<CompletedPattern>,
    pub columns: Vec<CompletedPattern>,
    pub main_diagonal: Option<CompletedPattern>,
    pub anti_diagonal: Option<CompletedPattern>,
    pub complete_board: Option<CompletedPattern>,
    pub total_bonus_xp: u64,
}

impl PatternCompletion {
    fn empty(board_id: BoardId, team_id: TeamId) -> Self {
        Self {
            board_id,
            team_id,
            rows: vec![],
            columns: vec![],
            main_diagonal: None,
            anti_diagonal: None,
            complete_board: None,
            total_bonus_xp: 0,
        }
    }

    /// All completed patterns: rows, columns, diagonals, then the complete board.
    pub fn completed(&self) -> impl Iterator<Item = &CompletedPattern> {
        self.rows
            .iter()
            .chain(&self.columns)
            .chain(&self.main_diagonal)
            .chain(&self.anti_diagonal)
            .chain(&self.complete_board)
    }

    fn push(&mut self, completed: CompletedPattern) {
        self.total_bonus_xp += u64::from(completed.bonus);
        match completed.pattern {
            Pattern::Row(_) => self.rows.push(completed),
            Pattern::Column(_) => self.columns.push(completed),
            Pattern::MainDiagonal => self.main_diagonal = Some(completed),
            Pattern::AntiDiagonal => self.anti_diagonal = Some(completed),
            Pattern::CompleteBoard => self.complete_board = Some(completed),
        }
    }
}

/// Patterns of `board` that carry a non-zero bonus and apply to its shape.
///
/// Rows and columns come first, then diagonals (square boards only), then the
/// complete board. Progression boards have none.
#[must_use]
pub fn configured_patterns(board: &Board) -> Vec<CompletedPattern> {
    if !board.kind.is_standard() {
        return vec![];
    }
    board
        .grid()
        .line_patterns()
        .chain([Pattern::CompleteBoard])
        .filter_map(|pattern| {
            board
                .bonus
                .bonus(pattern)
                .map(|bonus| CompletedPattern { pattern, bonus })
        })
        .collect()
}

/// Determines which bonus patterns `team` has completed on `board`.
///
/// # Example
///
/// ```
/// use bingo_engine::{
///     Board, BoardId, BoardKind, PatternBonusConfig, SubmissionLookup, SubmissionStatus,
///     TeamId, TeamTileSubmission, Tile, TileId,
/// };
/// use bingo_evaluator::pattern_evaluator::evaluate_patterns;
///
/// let board = Board {
///     id: BoardId(1),
///     name: "Main".to_owned(),
///     kind: BoardKind::Standard,
///     rows: 1,
///     columns: 2,
///     tiles: (0..2)
///         .map(|i| Tile { id: TileId(i as u64), index: i, weight: 10.0, name: String::new() })
///         .collect(),
///     bonus: PatternBonusConfig { row_bonuses: vec![25], ..PatternBonusConfig::default() },
/// };
/// let rows = (0..2)
///     .map(|i| TeamTileSubmission {
///         team_id: TeamId(1),
///         tile_id: TileId(i),
///         status: SubmissionStatus::Approved,
///         submissions: vec![],
///     })
///     .collect::<Vec<_>>();
///
/// let completion = evaluate_patterns(&board, TeamId(1), &SubmissionLookup::new(&rows));
/// assert_eq!(completion.rows.len(), 1);
/// assert_eq!(completion.total_bonus_xp, 25);
/// ```
#[must_use]
pub fn evaluate_patterns<A>(board: &Board, team: TeamId, approvals: &A) -> PatternCompletion
where
    A: TileApprovals + ?Sized,
{
    let mut completion = PatternCompletion::empty(board.id, team);
    if !board.kind.is_standard() {
        return completion;
    }

    let grid = board.grid();
    let cells = board.tiles_by_index();
    let is_cell_approved = |index: usize| {
        cells
            .get(index)
            .copied()
            .flatten()
            .is_some_and(|tile| approvals.is_approved(team, tile.id))
    };

    for configured in configured_patterns(board) {
        let pattern = configured.pattern;
        let (Some(indices), Some(expected_len)) =
            (grid.pattern_indices(pattern), grid.pattern_len(pattern))
        else {
            continue;
        };
        let complete = expected_len > 0
            && indices.len() == expected_len
            && indices.iter().all(|&index| is_cell_approved(index));
        if complete {
            completion.push(configured);
        }
    }

    tracing::trace!(
        board = %board.id,
        team = %team,
        patterns = completion.completed().count(),
        bonus = completion.total_bonus_xp,
        "evaluated board patterns"
    );
    completion
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bingo_engine::{BoardKind, PatternBonusConfig, Tile};

    use super::*;

    const TEAM: TeamId = TeamId(1);

    struct Approved(HashSet<TileId>);

    impl TileApprovals for Approved {
        fn is_approved(&self, team: TeamId, tile: TileId) -> bool {
            team == TEAM && self.0.contains(&tile)
        }
    }

    fn approved(indices: impl IntoIterator<Item = usize>) -> Approved {
        Approved(indices.into_iter().map(tile_id).collect())
    }

    fn tile_id(index: usize) -> TileId {
        TileId(u64::try_from(index).unwrap() + 1000)
    }

    fn board(rows: usize, columns: usize, bonus: PatternBonusConfig) -> Board {
        Board {
            id: BoardId(1),
            name: String::new(),
            kind: BoardKind::Standard,
            rows,
            columns,
            tiles: (0..rows * columns)
                .map(|index| Tile {
                    id: tile_id(index),
                    index,
                    weight: 10.0,
                    name: String::new(),
                })
                .collect(),
            bonus,
        }
    }

    #[test]
    fn test_all_rows_with_unconfigured_full_board() {
        let bonus = PatternBonusConfig {
            row_bonuses: vec![10; 5],
            ..PatternBonusConfig::default()
        };
        let board = board(5, 5, bonus);
        let completion = evaluate_patterns(&board, TEAM, &approved(0..25));
        assert_eq!(completion.rows.len(), 5);
        assert_eq!(completion.complete_board, None);
        assert_eq!(completion.total_bonus_xp, 50);
    }

    #[test]
    fn test_all_rows_and_full_board() {
        let bonus = PatternBonusConfig {
            row_bonuses: vec![10; 5],
            complete_board_bonus: Some(50),
            ..PatternBonusConfig::default()
        };
        let board = board(5, 5, bonus);
        let completion = evaluate_patterns(&board, TEAM, &approved(0..25));
        assert_eq!(
            completion.complete_board,
            Some(CompletedPattern {
                pattern: Pattern::CompleteBoard,
                bonus: 50
            })
        );
        assert_eq!(completion.total_bonus_xp, 100);
    }

    #[test]
    fn test_pending_tile_blocks_full_board() {
        let bonus = PatternBonusConfig {
            column_bonuses: vec![5; 3],
            complete_board_bonus: Some(40),
            ..PatternBonusConfig::default()
        };
        let board = board(3, 3, bonus);
        let completion = evaluate_patterns(&board, TEAM, &approved((0..9).filter(|&i| i != 4)));
        let columns = completion
            .columns
            .iter()
            .map(|c| c.pattern)
            .collect::<Vec<_>>();
        assert_eq!(columns, vec![Pattern::Column(0), Pattern::Column(2)]);
        assert_eq!(completion.complete_board, None);
        assert_eq!(completion.total_bonus_xp, 10);
    }

    #[test]
    fn test_diagonals_on_square_board() {
        let bonus = PatternBonusConfig {
            main_diagonal_bonus: Some(20),
            anti_diagonal_bonus: Some(30),
            ..PatternBonusConfig::default()
        };
        let board = board(3, 3, bonus);
        let completion = evaluate_patterns(&board, TEAM, &approved([0, 4, 8]));
        assert_eq!(
            completion.main_diagonal,
            Some(CompletedPattern {
                pattern: Pattern::MainDiagonal,
                bonus: 20
            })
        );
        assert_eq!(completion.anti_diagonal, None);
        assert_eq!(completion.total_bonus_xp, 20);
    }

    #[test]
    fn test_non_square_board_ignores_diagonal_bonus() {
        let bonus = PatternBonusConfig {
            main_diagonal_bonus: Some(20),
            ..PatternBonusConfig::default()
        };
        let board = board(2, 3, bonus);
        let completion = evaluate_patterns(&board, TEAM, &approved(0..6));
        assert_eq!(completion.main_diagonal, None);
        assert_eq!(completion.total_bonus_xp, 0);
    }

    #[test]
    fn test_unconfigured_patterns_are_never_awarded() {
        let bonus = PatternBonusConfig {
            row_bonuses: vec![0, 10],
            ..PatternBonusConfig::default()
        };
        let board = board(2, 2, bonus);
        let completion = evaluate_patterns(&board, TEAM, &approved(0..4));
        assert_eq!(completion.rows.len(), 1);
        assert_eq!(completion.rows[0].pattern, Pattern::Row(1));
        assert!(completion.columns.is_empty());
    }

    #[test]
    fn test_short_board_cannot_complete_last_row() {
        let bonus = PatternBonusConfig {
            row_bonuses: vec![10, 10],
            column_bonuses: vec![7, 7],
            complete_board_bonus: Some(50),
            ..PatternBonusConfig::default()
        };
        let mut board = board(2, 2, bonus);
        board.tiles.pop();
        let completion = evaluate_patterns(&board, TEAM, &approved(0..4));
        assert_eq!(completion.rows.len(), 1);
        assert_eq!(completion.columns.len(), 1);
        assert_eq!(completion.complete_board, None);
        assert_eq!(completion.total_bonus_xp, 17);
    }

    #[test]
    fn test_progression_board_awards_nothing() {
        let bonus = PatternBonusConfig {
            row_bonuses: vec![10, 10],
            complete_board_bonus: Some(50),
            ..PatternBonusConfig::default()
        };
        let mut board = board(2, 2, bonus);
        board.kind = BoardKind::Progression;
        let completion = evaluate_patterns(&board, TEAM, &approved(0..4));
        assert_eq!(completion.completed().count(), 0);
        assert_eq!(completion.total_bonus_xp, 0);
    }

    #[test]
    fn test_other_team_is_not_credited() {
        let bonus = PatternBonusConfig {
            row_bonuses: vec![10],
            ..PatternBonusConfig::default()
        };
        let board = board(1, 2, bonus);
        let completion = evaluate_patterns(&board, TeamId(2), &approved(0..2));
        assert_eq!(completion.total_bonus_xp, 0);
    }
}
