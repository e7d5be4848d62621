//! Move and label value types

use std::fmt;

use serde::{Deserialize, Serialize};

/// A player label placed into board cells ("X", "O", ...).
///
/// The empty label is the unplaced sentinel: a cell holding it has not
/// been claimed by either player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Create a label from its text.
    pub fn new(text: impl Into<String>) -> Self {
        Label(text.into())
    }

    /// The unplaced sentinel.
    pub const fn empty() -> Self {
        Label(String::new())
    }

    /// True for the unplaced sentinel.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label(text.to_string())
    }
}

/// A move in the game: a target cell and the label to place there.
///
/// Immutable once constructed; board cells replace their `Move` value
/// rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub label: Label,
}

impl Move {
    /// Create a move placing `label` at `(row, col)`.
    pub fn new(row: usize, col: usize, label: Label) -> Self {
        Move { row, col, label }
    }

    /// Create the unplaced cell value for `(row, col)`.
    pub fn unplaced(row: usize, col: usize) -> Self {
        Move {
            row,
            col,
            label: Label::empty(),
        }
    }

    /// True if this cell value has not been claimed by a player.
    pub fn is_unplaced(&self) -> bool {
        self.label.is_empty()
    }
}
