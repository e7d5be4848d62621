//! Top-level move selection for the automated player

use serde::{Deserialize, Serialize};

use super::{alpha_beta, dfs};
use crate::game::{Game, Move, PlayerKind};

/// Which search strategy the automated player runs.
///
/// Selected externally by integer level: 1 for the exhaustive
/// depth-first search, 2 for the alpha-beta-pruned search. Both return
/// identical scores; pruning only changes the work performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Exhaustive,
    Pruned,
}

impl Difficulty {
    /// Parse the external difficulty selector.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDifficulty`] for levels outside
    /// 1..=2.
    pub fn from_level(level: u8) -> Result<Self, crate::Error> {
        match level {
            1 => Ok(Difficulty::Exhaustive),
            2 => Ok(Difficulty::Pruned),
            _ => Err(crate::Error::InvalidDifficulty { level }),
        }
    }

    /// The external selector value for this strategy.
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Exhaustive => 1,
            Difficulty::Pruned => 2,
        }
    }
}

/// Outcome of one top-level move selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// The selected move.
    pub best: Move,
    /// The score guaranteed by the selected move.
    pub score: i32,
    /// Positions visited, terminal positions included.
    pub nodes: u64,
}

/// Select an optimal move for the current (automated) player.
///
/// Equivalent to [`analyze`] but discards the score and node count.
///
/// # Errors
///
/// See [`analyze`].
pub fn select_move(game: &mut Game) -> Result<Move, crate::Error> {
    analyze(game).map(|report| report.best)
}

/// Run the configured search and report the selected move.
///
/// Candidate moves are generated in row-major order and labeled with the
/// searching player's label; each is applied to the live game, scored by
/// recursing into the opposing (minimizing) ply, and rolled back. The
/// move with the strictly greatest score wins; ties resolve to the first
/// move encountered. The game is left bit-identical to its pre-call
/// state.
///
/// # Errors
///
/// Returns [`crate::Error::NotAutomated`] if the current player is
/// passive, and [`crate::Error::NoLegalMoves`] if no legal move exists
/// (a terminal or full board; callers own that precondition).
pub fn analyze(game: &mut Game) -> Result<SearchReport, crate::Error> {
    let player = game.current_player();
    let difficulty = match player.kind() {
        PlayerKind::Automated(difficulty) => difficulty,
        PlayerKind::Passive => {
            return Err(crate::Error::NotAutomated {
                label: player.label().to_string(),
            });
        }
    };
    let searcher = player.label().clone();
    let size = game.board_size();

    let mut nodes = 0;
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for row in 0..size {
        for col in 0..size {
            let mv = Move::new(row, col, searcher.clone());
            if !game.is_valid_move(&mv) {
                continue;
            }

            game.process_move(mv.clone());
            let score = match difficulty {
                Difficulty::Exhaustive => dfs::score(game, &searcher, false, &mut nodes),
                Difficulty::Pruned => {
                    alpha_beta::score(game, &searcher, false, i32::MIN, i32::MAX, &mut nodes)
                }
            };
            game.undo_move(&mv);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }
    }

    match best_move {
        Some(best) => Ok(SearchReport {
            best,
            score: best_score,
            nodes,
        }),
        None => Err(crate::Error::NoLegalMoves),
    }
}
