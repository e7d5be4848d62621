//! Play command - interactive game against the automated player

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::output,
    game::{DEFAULT_BOARD_SIZE, Game, Move, Player},
    search::{self, Difficulty},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the automated player")]
pub struct PlayArgs {
    /// Search difficulty (1 = exhaustive, 2 = alpha-beta); prompted if omitted
    #[arg(long, short = 'd')]
    pub difficulty: Option<u8>,

    /// Board side length
    #[arg(long, short = 's', default_value_t = DEFAULT_BOARD_SIZE)]
    pub board_size: usize,

    /// Label for the human player (moves first)
    #[arg(long, default_value = "X")]
    pub human_label: String,

    /// Label for the automated player
    #[arg(long, default_value = "O")]
    pub computer_label: String,

    /// Display color for the human player
    #[arg(long, default_value = "blue")]
    pub human_color: String,

    /// Display color for the automated player
    #[arg(long, default_value = "green")]
    pub computer_color: String,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let difficulty = match args.difficulty {
        Some(level) => Difficulty::from_level(level)?,
        None => prompt_difficulty(&mut lines)?,
    };

    let players = [
        Player::passive(args.human_label.as_str(), args.human_color.as_str()),
        Player::automated(
            args.computer_label.as_str(),
            args.computer_color.as_str(),
            difficulty,
        ),
    ];
    let mut game = Game::with_size(players, args.board_size)?;

    loop {
        play_one_game(&mut game, &mut lines)?;
        if !prompt_yes_no("Play again? [y/N] ", &mut lines)? {
            break;
        }
        game.reset_game();
    }

    Ok(())
}

fn play_one_game<I>(game: &mut Game, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("{}\n", output::render_board(game));

    loop {
        let mv = if game.current_player().is_automated() {
            let mv = search::select_move(game)?;
            println!(
                "{} plays {} {}",
                game.current_player().label(),
                mv.row,
                mv.col
            );
            mv
        } else {
            prompt_move(game, lines)?
        };

        game.process_move(mv);

        if game.has_winner() {
            let winner = game.current_player();
            println!("{}\n", output::render_winner_board(game));
            println!("Player \"{}\" ({}) won!", winner.label(), winner.color());
            return Ok(());
        }
        println!("{}\n", output::render_board(game));
        if game.is_tied() {
            println!("Tied game!");
            return Ok(());
        }

        game.toggle_player();
    }
}

fn prompt_move<I>(game: &Game, lines: &mut I) -> Result<Move>
where
    I: Iterator<Item = io::Result<String>>,
{
    let label = game.current_player().label().clone();
    loop {
        print!("{label} to move (row col): ");
        io::stdout().flush()?;

        let line = read_line(lines)?;
        let mv = match parse_coords(&line) {
            Ok((row, col)) => Move::new(row, col, label.clone()),
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        if game.is_valid_move(&mv) {
            return Ok(mv);
        }
        println!("Cell {} {} is taken or out of range.", mv.row, mv.col);
    }
}

fn prompt_difficulty<I>(lines: &mut I) -> Result<Difficulty>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("Enter difficulty (1 = exhaustive, 2 = alpha-beta): ");
        io::stdout().flush()?;

        let line = read_line(lines)?;
        match line.trim().parse::<u8>().ok().map(Difficulty::from_level) {
            Some(Ok(difficulty)) => return Ok(difficulty),
            _ => println!("Expected 1 or 2."),
        }
    }
}

fn prompt_yes_no<I>(prompt: &str, lines: &mut I) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{prompt}");
    io::stdout().flush()?;

    match lines.next().transpose()? {
        Some(line) => {
            let answer = line.trim().to_ascii_lowercase();
            Ok(answer == "y" || answer == "yes")
        }
        None => Ok(false),
    }
}

fn read_line<I>(lines: &mut I) -> Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    lines
        .next()
        .transpose()?
        .ok_or_else(|| anyhow!("input closed"))
}

fn parse_coords(input: &str) -> crate::error::Result<(usize, usize)> {
    let parse_error = || crate::Error::ParseMove {
        input: input.to_string(),
    };

    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(parse_error());
    }

    let row = parts[0].parse().map_err(|_| parse_error())?;
    let col = parts[1].parse().map_err(|_| parse_error())?;
    Ok((row, col))
}
