//! Alpha-beta-pruned scoring (difficulty 2)

use crate::game::{Game, Label, Move};

/// Score the live position for `searcher` with alpha-beta pruning.
///
/// Terminal scoring, move generation order, labeling, and the
/// apply/undo discipline are identical to [`dfs::score`]; the only
/// difference is the `alpha`/`beta` bounds carried across sibling
/// evaluations. Once `beta <= alpha` the remaining siblings at this ply
/// are skipped; already-explored moves have been rolled back by then.
/// The initial call uses `i32::MIN` / `i32::MAX` bounds.
///
/// Pruning never changes the returned score, only the work performed.
///
/// [`dfs::score`]: super::dfs::score
pub fn score(
    game: &mut Game,
    searcher: &Label,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
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
        'siblings: for row in 0..size {
            for col in 0..size {
                let mv = Move::new(row, col, searcher.clone());
                if !game.is_valid_move(&mv) {
                    continue;
                }
                game.process_move(mv.clone());
                let child = score(game, searcher, false, alpha, beta, nodes);
                game.undo_move(&mv);
                best = best.max(child);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break 'siblings;
                }
            }
        }
        best
    } else {
        let to_move = game.current_player().label().clone();
        let mut best = i32::MAX;
        'siblings: for row in 0..size {
            for col in 0..size {
                let mv = Move::new(row, col, to_move.clone());
                if !game.is_valid_move(&mv) {
                    continue;
                }
                game.process_move(mv.clone());
                let child = score(game, searcher, true, alpha, beta, nodes);
                game.undo_move(&mv);
                best = best.min(child);
                beta = beta.min(best);
                if beta <= alpha {
                    break 'siblings;
                }
            }
        }
        best
    }
}
