//! Error types for board input and strategy selection.
//!
//! Search exhaustion is not represented here: a strategy that cannot reach the goal
//! returns `None` from `solve`.

use thiserror::Error;

/// A board that is not a permutation of the values 0-8 on a 3x3 grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected {expected} cells, found {found}")]
    WrongCellCount { expected: usize, found: usize },

    #[error("value {value} at row {row} col {col} is outside 0-8")]
    ValueOutOfRange { value: u32, row: usize, col: usize },

    #[error("value {value} appears more than once (again at row {row} col {col})")]
    DuplicateValue { value: u8, row: usize, col: usize },

    #[error("unrecognized cell '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },
}

/// A strategy name that does not match any [`crate::solver::Algorithm`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm '{0}' (expected one of: astar, bfs, dfs, iddfs, bidirectional, greedy)")]
pub struct UnknownAlgorithm(pub String);
