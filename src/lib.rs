//! N-by-N tic-tac-toe engine with adversarial search
//!
//! This crate provides:
//! - A two-party turn-based game engine for an N-by-N generalization of
//!   tic-tac-toe, with precomputed winning-combination geometry
//! - An automated player backed by exhaustive depth-first game-tree
//!   search or alpha-beta-pruned search, selected by difficulty level
//! - A terminal front-end for interactive play and for benchmarking the
//!   two strategies against each other

pub mod cli;
pub mod error;
pub mod game;
pub mod search;

pub use error::{Error, Result};
pub use game::{Board, Combo, Coord, DEFAULT_BOARD_SIZE, Game, Label, Move, Player, PlayerKind};
pub use search::{Difficulty, SearchReport, analyze, select_move};
