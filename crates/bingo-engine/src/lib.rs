//! Data model for clan bingo events.
//!
//! This crate holds the plain in-memory records the scoring engine reads:
//!
//! - [`Board`], [`Tile`] and [`PatternBonusConfig`] - board configuration
//! - [`Goal`], [`GoalGroup`] and [`TeamGoalProgress`] - quantitative goals per tile
//! - [`TeamTileSubmission`] and [`Submission`] - team proof and its review status
//! - [`Grid`] - pure index arithmetic for rows, columns and diagonals
//! - [`EventSnapshot`] - one consistent read snapshot of an event
//!
//! Nothing here performs I/O. Records are produced by an external data-access layer
//! (or deserialized from JSON) and are never mutated by the engine.

pub use self::{core::*, snapshot::*};

pub mod core;
pub mod snapshot;

/// Structural problem with a board's tile layout.
///
/// Returned by [`Board::validate`]. Pattern evaluation never fails on these; it
/// treats missing tiles as incomplete instead.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("board {board} has zero rows or columns")]
    ZeroDimension { board: BoardId },
    #[display("board {board} declares {expected} tiles but has {actual}")]
    TileCountMismatch {
        board: BoardId,
        expected: usize,
        actual: usize,
    },
    #[display("board {board} has a tile at index {index}, outside its {tile_count} cells")]
    TileIndexOutOfRange {
        board: BoardId,
        index: usize,
        tile_count: usize,
    },
    #[display("board {board} has more than one tile at index {index}")]
    DuplicateTileIndex { board: BoardId, index: usize },
}
