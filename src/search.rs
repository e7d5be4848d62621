//! Adversarial search over the live game state
//!
//! Both strategies explore the remaining game tree depth-first through
//! the engine's apply/undo pair, mutating one shared board in place and
//! restoring it before returning. Strict stack discipline, no copies.

pub mod alpha_beta;
pub mod dfs;
pub mod selection;

pub use selection::{Difficulty, SearchReport, analyze, select_move};
