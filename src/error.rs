//! Error types for the eight_puzzle crate

use thiserror::Error;

/// Errors raised when a board or a search request is rejected before any
/// search takes place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolverError {
    #[error("board size must be at least 2, got {size}")]
    InvalidSize { size: usize },

    #[error("board has {got} cells, expected {expected} for a {size}x{size} grid")]
    InvalidBoardLength {
        size: usize,
        expected: usize,
        got: usize,
    },

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("tile value {value} is out of range for a {size}x{size} board")]
    TileOutOfRange { value: u32, size: usize },

    #[error("tile value {value} appears more than once")]
    DuplicateTile { value: u32 },

    #[error("board has no blank tile (0)")]
    MissingBlank,

    #[error("start is {start}x{start} but goal is {goal}x{goal}")]
    SizeMismatch { start: usize, goal: usize },

    #[error("cannot parse '{token}' as a tile on line {line}")]
    InvalidToken { token: String, line: usize },
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, SolverError>;
