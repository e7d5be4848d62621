use std::collections::HashSet;

use caro::{
    Difficulty, Game, Label, Move, Player, analyze, select_move,
    search::{alpha_beta, dfs},
};

fn game_with_automated_o(difficulty: Difficulty) -> Game {
    Game::new([
        Player::passive("X", "blue"),
        Player::automated("O", "green", difficulty),
    ])
    .unwrap()
}

/// Replay `prefix` with alternating labels (X first), toggling after
/// each move, so the game ends with O (the automated player) to move.
fn replay(difficulty: Difficulty, prefix: &[(usize, usize)]) -> Game {
    assert!(prefix.len() % 2 == 1, "prefix must leave O to move");
    let mut game = game_with_automated_o(difficulty);
    for &(row, col) in prefix {
        let mv = Move::new(row, col, game.current_player().label().clone());
        assert!(game.is_valid_move(&mv));
        game.process_move(mv);
        game.toggle_player();
    }
    game
}

#[test]
fn automated_o_answers_center_with_the_first_row_major_corner() {
    for difficulty in [Difficulty::Exhaustive, Difficulty::Pruned] {
        let mut game = replay(difficulty, &[(1, 1)]);

        let mv = select_move(&mut game).unwrap();
        assert_eq!((mv.row, mv.col), (0, 0));
        assert_eq!(mv.label.as_str(), "O");
    }
}

#[test]
fn search_leaves_the_live_game_bit_identical() {
    for difficulty in [Difficulty::Exhaustive, Difficulty::Pruned] {
        let mut game = replay(difficulty, &[(1, 1), (0, 0), (2, 2)]);
        let before = game.clone();

        select_move(&mut game).unwrap();
        assert_eq!(game, before);
    }
}

#[test]
fn both_strategies_select_the_same_move_and_score() {
    let prefixes: &[&[(usize, usize)]] = &[
        &[(1, 1)],
        &[(0, 0), (1, 1), (2, 2)],
        &[(0, 1), (1, 1), (2, 1)],
        &[(1, 1), (0, 0), (0, 2), (2, 0), (2, 2)],
    ];

    for prefix in prefixes {
        let mut exhaustive = replay(Difficulty::Exhaustive, prefix);
        let mut pruned = replay(Difficulty::Pruned, prefix);

        let full = analyze(&mut exhaustive).unwrap();
        let cut = analyze(&mut pruned).unwrap();

        assert_eq!(full.best, cut.best, "selection differs after {prefix:?}");
        assert_eq!(full.score, cut.score, "score differs after {prefix:?}");
        assert!(
            cut.nodes <= full.nodes,
            "pruning searched more nodes after {prefix:?}"
        );
    }
}

fn encode(game: &Game) -> String {
    let size = game.board_size();
    let mut out = String::new();
    for row in 0..size {
        for col in 0..size {
            let cell = game.board().cell(row, col);
            if cell.is_unplaced() {
                out.push('.');
            } else {
                out.push_str(cell.label.as_str());
            }
        }
    }
    out
}

fn check_position(game: &mut Game, searcher: &Label) {
    for maximizing in [false, true] {
        let mut full_nodes = 0;
        let full = dfs::score(game, searcher, maximizing, &mut full_nodes);

        let mut cut_nodes = 0;
        let cut = alpha_beta::score(
            game,
            searcher,
            maximizing,
            i32::MIN,
            i32::MAX,
            &mut cut_nodes,
        );

        assert_eq!(
            full,
            cut,
            "scores disagree at '{}' (maximizing={maximizing})",
            encode(game)
        );
        assert!(cut_nodes <= full_nodes);
    }
}

fn explore(game: &mut Game, searcher: &Label, depth: usize, seen: &mut HashSet<String>) {
    if !seen.insert(encode(game)) {
        return;
    }
    check_position(game, searcher);

    if game.has_winner() || game.is_tied() {
        return;
    }

    let labels = [Label::from("X"), Label::from("O")];
    let label = &labels[depth % 2];
    let size = game.board_size();
    for row in 0..size {
        for col in 0..size {
            let mv = Move::new(row, col, label.clone());
            if !game.is_valid_move(&mv) {
                continue;
            }
            game.process_move(mv.clone());
            explore(game, searcher, depth + 1, seen);
            game.undo_move(&mv);
        }
    }
}

#[test]
fn pruning_never_changes_the_score_on_any_reachable_position() {
    // Walk every position reachable through alternating play on a 3x3
    // board and score it with both strategies. The engine reports the
    // searcher as current for the whole walk, as it does during a real
    // selection call.
    let mut game = game_with_automated_o(Difficulty::Exhaustive);
    game.toggle_player();

    let searcher = Label::from("O");
    let mut seen = HashSet::new();
    explore(&mut game, &searcher, 0, &mut seen);

    // All reachable boards, empty board and terminal positions included.
    assert_eq!(seen.len(), 5478);
}

#[test]
fn select_move_errors_on_a_full_board() {
    let mut game = replay(
        Difficulty::Exhaustive,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert!(game.is_tied());

    assert!(matches!(
        select_move(&mut game),
        Err(caro::Error::NoLegalMoves)
    ));
}

#[test]
fn report_counts_terminal_probes() {
    let mut game = replay(Difficulty::Pruned, &[(1, 1)]);
    let report = analyze(&mut game).unwrap();

    assert!(report.nodes > 0);
    assert_eq!(report.best.label.as_str(), "O");
}
