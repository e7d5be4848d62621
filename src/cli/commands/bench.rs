//! Bench command - benchmark the two search strategies

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::output,
    game::{DEFAULT_BOARD_SIZE, Game, Move, Player},
    search::{self, Difficulty},
};

#[derive(Parser, Debug)]
#[command(about = "Benchmark both search strategies against a random mover")]
pub struct BenchArgs {
    /// Number of games per difficulty
    #[arg(long, short = 'g', default_value_t = 20)]
    pub games: usize,

    /// Board side length
    #[arg(long, short = 's', default_value_t = DEFAULT_BOARD_SIZE)]
    pub board_size: usize,

    /// Random seed for the passive mover (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a JSON summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct StrategyStats {
    difficulty: u8,
    games: usize,
    wins: usize,
    draws: usize,
    losses: usize,
    total_nodes: u64,
    mean_nodes_per_move: f64,
}

#[derive(Debug, Serialize)]
struct BenchSummary {
    board_size: usize,
    seed: u64,
    strategies: Vec<StrategyStats>,
}

enum Outcome {
    Win,
    Draw,
    Loss,
}

pub fn execute(args: BenchArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    println!(
        "Benchmarking on a {0}x{0} board, {1} games per difficulty, seed {2}",
        args.board_size, args.games, seed
    );

    let mut strategies = Vec::new();
    for difficulty in [Difficulty::Exhaustive, Difficulty::Pruned] {
        output::print_section(&format!(
            "Difficulty {} ({:?})",
            difficulty.level(),
            difficulty
        ));

        let stats = run_strategy(difficulty, &args, seed)?;
        output::print_kv("Wins", &stats.wins.to_string());
        output::print_kv("Draws", &stats.draws.to_string());
        output::print_kv("Losses", &stats.losses.to_string());
        output::print_kv("Nodes searched", &stats.total_nodes.to_string());
        output::print_kv(
            "Mean nodes/move",
            &format!("{:.1}", stats.mean_nodes_per_move),
        );
        strategies.push(stats);
    }

    if let Some(path) = &args.summary {
        let summary = BenchSummary {
            board_size: args.board_size,
            seed,
            strategies,
        };
        write_summary(path, &summary)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}

fn write_summary(path: &Path, summary: &BenchSummary) -> crate::error::Result<()> {
    to_writer_pretty(File::create(path)?, summary)?;
    Ok(())
}

fn run_strategy(difficulty: Difficulty, args: &BenchArgs, seed: u64) -> Result<StrategyStats> {
    // Same seed for both difficulties so the random mover plays the same
    // openings against each strategy.
    let mut rng = StdRng::seed_from_u64(seed);

    let mut wins = 0;
    let mut draws = 0;
    let mut losses = 0;
    let mut total_nodes = 0;
    let mut searcher_moves = 0;

    let pb = output::create_game_progress(args.games as u64);
    for _ in 0..args.games {
        let players = [
            Player::passive("X", "blue"),
            Player::automated("O", "green", difficulty),
        ];
        let mut game = Game::with_size(players, args.board_size)?;

        match play_game(&mut game, &mut rng, &mut total_nodes, &mut searcher_moves)? {
            Outcome::Win => wins += 1,
            Outcome::Draw => draws += 1,
            Outcome::Loss => losses += 1,
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(StrategyStats {
        difficulty: difficulty.level(),
        games: args.games,
        wins,
        draws,
        losses,
        total_nodes,
        mean_nodes_per_move: total_nodes as f64 / searcher_moves.max(1) as f64,
    })
}

fn play_game(
    game: &mut Game,
    rng: &mut StdRng,
    total_nodes: &mut u64,
    searcher_moves: &mut u64,
) -> Result<Outcome> {
    loop {
        if game.current_player().is_automated() {
            let report = search::analyze(game)?;
            *total_nodes += report.nodes;
            *searcher_moves += 1;
            game.process_move(report.best);
        } else {
            let empties = game.board().empty_cells();
            let &(row, col) = empties
                .choose(rng)
                .expect("non-terminal board has empty cells");
            let mv = Move::new(row, col, game.current_player().label().clone());
            game.process_move(mv);
        }

        if game.has_winner() {
            let searcher_won = game.winner_label() == Some(game.players()[1].label());
            return Ok(if searcher_won {
                Outcome::Win
            } else {
                Outcome::Loss
            });
        }
        if game.is_tied() {
            return Ok(Outcome::Draw);
        }

        game.toggle_player();
    }
}
