//! Exhaustive depth-first scoring (difficulty 1)

use crate::game::{Game, Label, Move};

/// Score the live position for `searcher` by exhaustive depth-first
/// recursion.
///
/// Terminal positions score +1 if the label that filled the winning
/// combination is the searcher's, -1 otherwise, and 0 for a tie.
/// Maximizing plies generate moves labeled with the searcher's label;
/// minimizing plies use whatever label the engine reports as current at
/// that ply. Every child move is applied to the live game and rolled
/// back before the next sibling is considered, so the game is
/// bit-identical on return.
///
/// `nodes` is incremented once per position visited.
pub fn score(game: &mut Game, searcher: &Label, maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if game.has_winner() {
        return if game.winner_label() == Some(searcher) {
            1
        } else {
            -1
        };
    }
    if game.is_tied() {
        return 0;
    }

    let size = game.board_size();
    if maximizing {
        let mut best = i32::MIN;
        for row in 0..size {
            for col in 0..size {
                let mv = Move::new(row, col, searcher.clone());
                if !game.is_valid_move(&mv) {
                    continue;
                }
                game.process_move(mv.clone());
                let child = score(game, searcher, false, nodes);
                game.undo_move(&mv);
                best = best.max(child);
            }
        }
        best
    } else {
        let to_move = game.current_player().label().clone();
        let mut best = i32::MAX;
        for row in 0..size {
            for col in 0..size {
                let mv = Move::new(row, col, to_move.clone());
                if !game.is_valid_move(&mv) {
                    continue;
                }
                game.process_move(mv.clone());
                let child = score(game, searcher, true, nodes);
                game.undo_move(&mv);
                best = best.min(child);
            }
        }
        best
    }
}
