//! Error types shared by the engine and the binary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be a positive integer, got {0}")]
    NonPositiveSize(i64),

    #[error("board size {0} exceeds the maximum of {max}", max = crate::config::MAX_SIZE)]
    SizeTooLarge(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row")]
    Empty,

    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cell ({row}, {col}) holds {value}, which is not a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

/// A direction code outside the four valid symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid direction code {0} (expected 0..=3)")]
pub struct InvalidDirection(pub u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The spawner was asked to place a tile on a grid with no empty cell.
    #[error("cannot spawn a tile: all {cells} cells are occupied")]
    BoardFull { cells: usize },
}
