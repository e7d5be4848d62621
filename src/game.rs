//! Game engine: board state, moves, players, and turn management

pub mod board;
pub mod combos;
pub mod engine;
pub mod moves;
pub mod player;

pub use board::{Board, MIN_BOARD_SIZE};
pub use combos::{Combo, Coord, winning_combos};
pub use engine::{DEFAULT_BOARD_SIZE, Game};
pub use moves::{Label, Move};
pub use player::{Player, PlayerKind};
