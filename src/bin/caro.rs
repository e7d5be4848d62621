//! caro CLI - N-by-N tic-tac-toe against a game-tree searcher
//!
//! This CLI provides:
//! - Interactive play against the automated player at either difficulty
//! - Benchmarking of the exhaustive and alpha-beta search strategies

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "caro")]
#[command(version, about = "N-by-N tic-tac-toe with an adversarial search engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the automated player
    Play(caro::cli::commands::play::PlayArgs),

    /// Benchmark both search strategies against a random mover
    Bench(caro::cli::commands::bench::BenchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => caro::cli::commands::play::execute(args),
        Commands::Bench(args) => caro::cli::commands::bench::execute(args),
    }
}
