//! Output formatting and progress bars for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::game::{Coord, Game};

/// Render the board with row/column indexes and `.` for unplaced cells.
pub fn render_board(game: &Game) -> String {
    render(game, &[])
}

/// Render the board with the winning combination's cells bracketed.
pub fn render_winner_board(game: &Game) -> String {
    let combo = game.winner_combo().to_vec();
    render(game, &combo)
}

fn render(game: &Game, highlight: &[Coord]) -> String {
    let size = game.board_size();
    let mut out = String::from("   ");
    for col in 0..size {
        out.push_str(&format!(" {col} "));
    }

    for row in 0..size {
        out.push('\n');
        out.push_str(&format!("{row}  "));
        for col in 0..size {
            let cell = game.board().cell(row, col);
            let text = if cell.is_unplaced() {
                ".".to_string()
            } else {
                cell.label.to_string()
            };
            if highlight.contains(&(row, col)) {
                out.push_str(&format!("[{text}]"));
            } else {
                out.push_str(&format!(" {text} "));
            }
        }
    }
    out
}

/// Create a progress bar for a batch of benchmark games
pub fn create_game_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}
