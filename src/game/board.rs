//! Board state representation and win/tie detection

use std::fmt;

use super::{
    combos::{Combo, Coord, winning_combos},
    moves::{Label, Move},
};

/// Smallest supported board. Below 3 the two-diagonal geometry
/// degenerates.
pub const MIN_BOARD_SIZE: usize = 3;

/// The first completed winning combination, with the label that filled it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Win {
    combo: Combo,
    label: Label,
}

/// An N-by-N grid of [`Move`] values plus the precomputed winning
/// combinations and winner bookkeeping.
///
/// Every cell's coordinates match its position in the grid; only the
/// label changes when a move is applied. The combination set is derived
/// from the board size at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Move>>,
    combos: Vec<Combo>,
    winner: Option<Win>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardSize`] if `size` is below
    /// [`MIN_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        if size < MIN_BOARD_SIZE {
            return Err(crate::Error::InvalidBoardSize { size });
        }

        let cells = (0..size)
            .map(|row| (0..size).map(|col| Move::unplaced(row, col)).collect())
            .collect();

        Ok(Board {
            size,
            cells,
            combos: winning_combos(size),
            winner: None,
        })
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> &Move {
        &self.cells[row][col]
    }

    /// The precomputed winning combinations, in scan order.
    pub fn combos(&self) -> &[Combo] {
        &self.combos
    }

    /// Coordinates of all unplaced cells, in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_unplaced())
            .map(|cell| (cell.row, cell.col))
            .collect()
    }

    /// True iff the move targets an existing unplaced cell and no winner
    /// has been declared. Side-effect free.
    pub fn is_valid(&self, mv: &Move) -> bool {
        mv.row < self.size
            && mv.col < self.size
            && self.winner.is_none()
            && self.cells[mv.row][mv.col].is_unplaced()
    }

    /// Overwrite the target cell with `mv`, then scan the winning
    /// combinations in order and record the first completed one.
    ///
    /// No legality check is performed here; callers must check
    /// [`is_valid`](Self::is_valid) first.
    pub fn apply(&mut self, mv: Move) {
        let (row, col) = (mv.row, mv.col);
        self.cells[row][col] = mv;

        if let Some(win) = self.scan_for_win() {
            self.winner = Some(win);
        }
    }

    /// Reset the target cell to its unplaced state and unconditionally
    /// clear the winner, regardless of whether this move caused it.
    ///
    /// Only valid in exact reverse order of [`apply`](Self::apply) calls
    /// within a single search branch.
    pub fn undo(&mut self, mv: &Move) {
        self.cells[mv.row][mv.col] = Move::unplaced(mv.row, mv.col);
        self.winner = None;
    }

    /// True iff there is no winner and no unplaced cell remains.
    pub fn is_tied(&self) -> bool {
        self.winner.is_none() && self.cells.iter().flatten().all(|cell| !cell.is_unplaced())
    }

    /// True iff a winner has been declared.
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// The winning combination, or an empty slice if there is no winner.
    pub fn winner_combo(&self) -> &[Coord] {
        match &self.winner {
            Some(win) => &win.combo,
            None => &[],
        }
    }

    /// The label that filled the winning combination, if any.
    pub fn winner_label(&self) -> Option<&Label> {
        self.winner.as_ref().map(|win| &win.label)
    }

    /// Restore every cell to its unplaced state and clear the winner.
    pub fn reset(&mut self) {
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                *cell = Move::unplaced(cell.row, cell.col);
            }
        }
        self.winner = None;
    }

    fn scan_for_win(&self) -> Option<Win> {
        for combo in &self.combos {
            let (row, col) = combo[0];
            let first = &self.cells[row][col].label;
            if first.is_empty() {
                continue;
            }
            if combo
                .iter()
                .all(|&(row, col)| self.cells[row][col].label == *first)
            {
                return Some(Win {
                    combo: combo.clone(),
                    label: first.clone(),
                });
            }
        }
        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if cell.is_unplaced() {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", cell.label)?;
                }
            }
        }
        Ok(())
    }
}
