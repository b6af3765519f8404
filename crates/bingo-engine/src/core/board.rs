use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{BoardError, BoardId, Grid, Pattern, TileId};

/// Type of a board.
///
/// Only [`BoardKind::Standard`] boards award pattern bonuses. Progression boards
/// are scored on tile weights alone, whatever their bonus configuration says.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum BoardKind {
    #[default]
    Standard,
    Progression,
}

/// Bonus experience configured for each pattern of a board.
///
/// A bonus that is absent or zero means "not configured": the pattern can never be
/// awarded and does not count toward the maximum possible bonus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternBonusConfig {
    /// Bonus per row index. Rows past the end of this list have no bonus.
    #[serde(default)]
    pub row_bonuses: Vec<u32>,
    /// Bonus per column index. Columns past the end of this list have no bonus.
    #[serde(default)]
    pub column_bonuses: Vec<u32>,
    #[serde(default)]
    pub main_diagonal_bonus: Option<u32>,
    #[serde(default)]
    pub anti_diagonal_bonus: Option<u32>,
    #[serde(default)]
    pub complete_board_bonus: Option<u32>,
}

impl PatternBonusConfig {
    /// Returns the configured non-zero bonus for a pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use bingo_engine::{Pattern, PatternBonusConfig};
    ///
    /// let config = PatternBonusConfig {
    ///     row_bonuses: vec![10, 0],
    ///     complete_board_bonus: Some(50),
    ///     ..PatternBonusConfig::default()
    /// };
    /// assert_eq!(config.bonus(Pattern::Row(0)), Some(10));
    /// assert_eq!(config.bonus(Pattern::Row(1)), None);
    /// assert_eq!(config.bonus(Pattern::Row(7)), None);
    /// assert_eq!(config.bonus(Pattern::CompleteBoard), Some(50));
    /// ```
    #[must_use]
    pub fn bonus(&self, pattern: Pattern) -> Option<u32> {
        let bonus = match pattern {
            Pattern::Row(row) => self.row_bonuses.get(row).copied(),
            Pattern::Column(col) => self.column_bonuses.get(col).copied(),
            Pattern::MainDiagonal => self.main_diagonal_bonus,
            Pattern::AntiDiagonal => self.anti_diagonal_bonus,
            Pattern::CompleteBoard => self.complete_board_bonus,
        };
        bonus.filter(|&b| b > 0)
    }
}

/// One cell of a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    /// Zero-based linear position on the board.
    pub index: usize,
    /// Experience awarded to a team once the tile is approved.
    pub weight: f64,
    #[serde(default)]
    pub name: String,
}

/// A `rows × columns` bingo board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: BoardKind,
    pub rows: usize,
    pub columns: usize,
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub bonus: PatternBonusConfig,
}

impl Board {
    /// Index arithmetic for this board, sized by the tiles actually present.
    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::with_tile_count(self.rows, self.columns, self.tiles.len())
    }

    /// Returns the tile at each cell position, `None` where a cell has no tile.
    ///
    /// The result has exactly `rows * columns` entries. Tiles whose index lies off
    /// the grid are ignored; if two tiles share an index, the first one wins.
    #[must_use]
    pub fn tiles_by_index(&self) -> Vec<Option<&Tile>> {
        let mut cells = vec![None; self.rows * self.columns];
        for tile in &self.tiles {
            if let Some(cell @ None) = cells.get_mut(tile.index) {
                *cell = Some(tile);
            }
        }
        cells
    }

    /// Checks that the tile layout matches the declared dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use bingo_engine::{Board, BoardError, BoardId, BoardKind, PatternBonusConfig};
    ///
    /// let board = Board {
    ///     id: BoardId(1),
    ///     name: String::new(),
    ///     kind: BoardKind::Standard,
    ///     rows: 2,
    ///     columns: 2,
    ///     tiles: vec![],
    ///     bonus: PatternBonusConfig::default(),
    /// };
    /// assert!(matches!(
    ///     board.validate(),
    ///     Err(BoardError::TileCountMismatch { expected: 4, actual: 0, .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), BoardError> {
        let board = self.id;
        if self.rows == 0 || self.columns == 0 {
            return Err(BoardError::ZeroDimension { board });
        }
        let expected = self.rows * self.columns;
        if self.tiles.len() != expected {
            return Err(BoardError::TileCountMismatch {
                board,
                expected,
                actual: self.tiles.len(),
            });
        }
        let mut seen = HashSet::with_capacity(expected);
        for tile in &self.tiles {
            if tile.index >= expected {
                return Err(BoardError::TileIndexOutOfRange {
                    board,
                    index: tile.index,
                    tile_count: expected,
                });
            }
            if !seen.insert(tile.index) {
                return Err(BoardError::DuplicateTileIndex {
                    board,
                    index: tile.index,
                });
            }
        }
        Ok(())
    }
}
