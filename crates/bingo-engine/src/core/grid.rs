use serde::{Deserialize, Serialize};

/// A scoring pattern on a board.
///
/// Rows and columns carry their zero-based index. Diagonals only exist on square
/// boards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum Pattern {
    #[display("row {_0}")]
    Row(usize),
    #[display("column {_0}")]
    Column(usize),
    #[display("main diagonal")]
    MainDiagonal,
    #[display("anti-diagonal")]
    AntiDiagonal,
    #[display("complete board")]
    CompleteBoard,
}

/// Index arithmetic over a `rows × columns` board.
///
/// Tiles are addressed by a zero-based linear index:
///
/// ```text
/// row = index / columns
/// col = index % columns
/// ```
///
/// `tile_count` is normally `rows * columns`. A grid built with fewer tiles is
/// "short": row indices past the last tile are clipped away, which the pattern
/// evaluator detects as an incomplete line.
///
/// # Example
///
/// ```
/// use bingo_engine::Grid;
///
/// let grid = Grid::new(3, 3);
/// assert_eq!(grid.row_indices(1), vec![3, 4, 5]);
/// assert_eq!(grid.column_indices(2), vec![2, 5, 8]);
/// assert_eq!(grid.main_diagonal_indices(), Some(vec![0, 4, 8]));
/// assert_eq!(grid.anti_diagonal_indices(), Some(vec![2, 4, 6]));
///
/// let wide = Grid::new(2, 3);
/// assert_eq!(wide.main_diagonal_indices(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    tile_count: usize,
}

impl Grid {
    /// Creates a full grid with `rows * columns` tiles.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            tile_count: rows * columns,
        }
    }

    /// Creates a grid whose actual tile count may differ from `rows * columns`.
    #[must_use]
    pub const fn with_tile_count(rows: usize, columns: usize, tile_count: usize) -> Self {
        Self {
            rows,
            columns,
            tile_count,
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Number of cells the declared dimensions call for.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.columns && self.rows > 0
    }

    /// Returns the `(row, column)` of a linear index, or `None` if it is off the grid.
    #[must_use]
    pub const fn position(&self, index: usize) -> Option<(usize, usize)> {
        if self.columns == 0 || index >= self.cell_count() {
            return None;
        }
        Some((index / self.columns, index % self.columns))
    }

    /// Linear indices of row `row`, clipped to the actual tile count.
    #[must_use]
    pub fn row_indices(&self, row: usize) -> Vec<usize> {
        (0..self.columns)
            .map(|col| row * self.columns + col)
            .filter(|&index| index < self.tile_count)
            .collect()
    }

    /// Linear indices of column `col`.
    #[must_use]
    pub fn column_indices(&self, col: usize) -> Vec<usize> {
        (0..self.rows).map(|row| row * self.columns + col).collect()
    }

    /// Linear indices of the main diagonal, or `None` for non-square grids.
    #[must_use]
    pub fn main_diagonal_indices(&self) -> Option<Vec<usize>> {
        self.is_square().then(|| main_diagonal_indices(self.rows))
    }

    /// Linear indices of the anti-diagonal, or `None` for non-square grids.
    #[must_use]
    pub fn anti_diagonal_indices(&self) -> Option<Vec<usize>> {
        self.is_square().then(|| anti_diagonal_indices(self.rows))
    }

    /// Number of cells a pattern covers when the grid is complete.
    ///
    /// Returns `None` for patterns that do not apply to this grid.
    #[must_use]
    pub fn pattern_len(&self, pattern: Pattern) -> Option<usize> {
        match pattern {
            Pattern::Row(row) => (row < self.rows).then_some(self.columns),
            Pattern::Column(col) => (col < self.columns).then_some(self.rows),
            Pattern::MainDiagonal | Pattern::AntiDiagonal => {
                self.is_square().then_some(self.rows)
            }
            Pattern::CompleteBoard => Some(self.cell_count()),
        }
    }

    /// Linear indices covered by a pattern.
    ///
    /// Returns `None` when the pattern is not applicable (a diagonal on a
    /// non-square grid, or a row/column beyond the grid). Callers must treat that
    /// as "pattern not applicable", never as an empty, trivially complete line.
    #[must_use]
    pub fn pattern_indices(&self, pattern: Pattern) -> Option<Vec<usize>> {
        match pattern {
            Pattern::Row(row) => (row < self.rows).then(|| self.row_indices(row)),
            Pattern::Column(col) => (col < self.columns).then(|| self.column_indices(col)),
            Pattern::MainDiagonal => self.main_diagonal_indices(),
            Pattern::AntiDiagonal => self.anti_diagonal_indices(),
            Pattern::CompleteBoard => Some((0..self.cell_count()).collect()),
        }
    }

    /// All line patterns of this grid: rows, then columns, then diagonals if square.
    pub fn line_patterns(&self) -> impl Iterator<Item = Pattern> + '_ {
        let diagonals = if self.is_square() {
            &[Pattern::MainDiagonal, Pattern::AntiDiagonal][..]
        } else {
            &[][..]
        };
        (0..self.rows)
            .map(Pattern::Row)
            .chain((0..self.columns).map(Pattern::Column))
            .chain(diagonals.iter().copied())
    }
}

/// Linear indices `{ i*size + i }` of the main diagonal of a `size × size` grid.
#[must_use]
pub fn main_diagonal_indices(size: usize) -> Vec<usize> {
    (0..size).map(|i| i * size + i).collect()
}

/// Linear indices `{ i*size + (size-1-i) }` of the anti-diagonal of a `size × size` grid.
#[must_use]
pub fn anti_diagonal_indices(size: usize) -> Vec<usize> {
    (0..size).map(|i| i * size + (size - 1 - i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_index_lies_on_its_row_and_column() {
        for rows in 1..=6 {
            for columns in 1..=6 {
                let grid = Grid::new(rows, columns);
                for index in 0..grid.tile_count() {
                    assert!(grid.row_indices(index / columns).contains(&index));
                    assert!(grid.column_indices(index % columns).contains(&index));
                }
            }
        }
    }

    #[test]
    fn test_diagonal_membership() {
        for size in 1..=7 {
            let grid = Grid::new(size, size);
            let main = grid.main_diagonal_indices().unwrap();
            let anti = grid.anti_diagonal_indices().unwrap();
            for index in 0..grid.tile_count() {
                let (row, col) = grid.position(index).unwrap();
                assert_eq!(main.contains(&index), row == col);
                assert_eq!(anti.contains(&index), row + col == size - 1);
            }
        }
    }

    #[test]
    fn test_non_square_has_no_diagonals() {
        let grid = Grid::new(2, 4);
        assert!(grid.main_diagonal_indices().is_none());
        assert!(grid.anti_diagonal_indices().is_none());
        assert!(grid.pattern_indices(Pattern::MainDiagonal).is_none());
        assert_eq!(grid.line_patterns().count(), 6);
    }

    #[test]
    fn test_short_grid_clips_last_row() {
        let grid = Grid::with_tile_count(3, 3, 7);
        assert_eq!(grid.row_indices(2), vec![6]);
        assert_eq!(grid.column_indices(2), vec![2, 5, 8]);
        assert_eq!(grid.pattern_len(Pattern::Row(2)), Some(3));
    }

    #[test]
    fn test_out_of_range_patterns() {
        let grid = Grid::new(2, 2);
        assert!(grid.pattern_indices(Pattern::Row(2)).is_none());
        assert!(grid.pattern_indices(Pattern::Column(5)).is_none());
        assert_eq!(grid.position(4), None);
        assert_eq!(
            grid.pattern_indices(Pattern::CompleteBoard),
            Some(vec![0, 1, 2, 3])
        );
    }

    #[test]
    fn test_line_pattern_order() {
        let patterns = Grid::new(2, 2).line_patterns().collect::<Vec<_>>();
        assert_eq!(
            patterns,
            vec![
                Pattern::Row(0),
                Pattern::Row(1),
                Pattern::Column(0),
                Pattern::Column(1),
                Pattern::MainDiagonal,
                Pattern::AntiDiagonal,
            ]
        );
    }
}
