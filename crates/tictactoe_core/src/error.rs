//! Error types for board and search operations
//!
//! All of these are synchronous contract violations by the caller (or, for
//! `OccupiedCell` raised from inside a search, a defect in the engine
//! itself). None of them are retryable and none are logged here;
//! presentation is the driver's job.

use thiserror::Error;

/// Errors from reading or playing a cell on a [`crate::Board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The cell index is outside `0..9`.
    #[error("cell {0} is outside the board (expected 0..9)")]
    OutOfRange(usize),
    /// The target cell already holds a mark.
    #[error("cell {0} is already occupied")]
    OccupiedCell(usize),
}

/// Errors from asking an [`crate::Engine`] for a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The board is full or the game is already decided.
    #[error("no legal move: the board is full or the game is decided")]
    NoLegalMove,
}
