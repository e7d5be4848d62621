//! Error types for the caro crate

use thiserror::Error;

/// Main error type for the caro crate
///
/// Illegal in-game moves are not errors; they are rejected by the
/// [`is_valid_move`](crate::Game::is_valid_move) predicate. Errors cover
/// caller contract violations, configuration problems, and front-end
/// I/O.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no legal move remains; the board is terminal or full")]
    NoLegalMoves,

    #[error("current player '{label}' is not automated")]
    NotAutomated { label: String },

    #[error("invalid difficulty level {level} (expected 1 or 2)")]
    InvalidDifficulty { level: u8 },

    #[error("invalid board size {size} (must be at least 3)")]
    InvalidBoardSize { size: usize },

    #[error("player labels must be distinct, got '{label}' twice")]
    DuplicateLabels { label: String },

    #[error("player labels must be non-empty")]
    EmptyLabel,

    #[error("invalid move '{input}' (expected 'row col', e.g. '0 2')")]
    ParseMove { input: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
