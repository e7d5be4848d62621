//! Game engine: move processing and turn management

use super::{
    board::Board,
    combos::Coord,
    moves::{Label, Move},
    player::Player,
};

/// Board side length used when none is specified.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// A live game: the board plus two registered players and whose turn it
/// is.
///
/// The current player cycles round-robin over the two registered
/// players, starting with the first. The search engine mutates the game
/// transiently through [`process_move`](Self::process_move) /
/// [`undo_move`](Self::undo_move) and must leave it bit-identical to its
/// pre-call state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
}

impl Game {
    /// Create a game on the default 3-by-3 board.
    ///
    /// # Errors
    ///
    /// Returns an error if the player labels are empty or not distinct.
    pub fn new(players: [Player; 2]) -> Result<Self, crate::Error> {
        Self::with_size(players, DEFAULT_BOARD_SIZE)
    }

    /// Create a game on an N-by-N board. The size is fixed for the
    /// game's lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is below the supported minimum, or
    /// if the player labels are empty or not distinct.
    pub fn with_size(players: [Player; 2], size: usize) -> Result<Self, crate::Error> {
        if players.iter().any(|player| player.label().is_empty()) {
            return Err(crate::Error::EmptyLabel);
        }
        if players[0].label() == players[1].label() {
            return Err(crate::Error::DuplicateLabels {
                label: players[0].label().to_string(),
            });
        }

        Ok(Game {
            board: Board::new(size)?,
            players,
            current: 0,
        })
    }

    /// Read access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board side length.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// The two registered players, in registration order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// True iff `mv` targets an empty cell and no winner is declared.
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        self.board.is_valid(mv)
    }

    /// Apply `mv` and run win detection. Callers must check
    /// [`is_valid_move`](Self::is_valid_move) first.
    pub fn process_move(&mut self, mv: Move) {
        self.board.apply(mv);
    }

    /// Roll back `mv`, clearing any declared winner. Only valid in exact
    /// reverse order of `process_move` calls.
    pub fn undo_move(&mut self, mv: &Move) {
        self.board.undo(mv);
    }

    /// True iff a winning combination has been completed.
    pub fn has_winner(&self) -> bool {
        self.board.has_winner()
    }

    /// True iff the board is full with no winner.
    pub fn is_tied(&self) -> bool {
        self.board.is_tied()
    }

    /// The winning combination, or an empty slice if there is no winner.
    pub fn winner_combo(&self) -> &[Coord] {
        self.board.winner_combo()
    }

    /// The label that filled the winning combination, if any.
    pub fn winner_label(&self) -> Option<&Label> {
        self.board.winner_label()
    }

    /// Advance to the next player in the cycle. No legality check;
    /// callers are responsible for not toggling after a winner is
    /// declared.
    pub fn toggle_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Restore every cell to its unplaced state and clear the winner.
    /// The current player is left unchanged.
    pub fn reset_game(&mut self) {
        self.board.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::Player;

    fn new_game() -> Game {
        Game::new([Player::passive("X", "blue"), Player::passive("O", "green")]).unwrap()
    }

    #[test]
    fn test_first_registered_player_opens() {
        let game = new_game();
        assert_eq!(game.current_player().label().as_str(), "X");
    }

    #[test]
    fn test_toggle_cycles_round_robin() {
        let mut game = new_game();
        game.toggle_player();
        assert_eq!(game.current_player().label().as_str(), "O");
        game.toggle_player();
        assert_eq!(game.current_player().label().as_str(), "X");
        game.toggle_player();
        assert_eq!(game.current_player().label().as_str(), "O");
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let result = Game::new([Player::passive("X", "blue"), Player::passive("X", "green")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_label_rejected() {
        let result = Game::new([Player::passive("", "blue"), Player::passive("O", "green")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reset_leaves_current_player_unchanged() {
        let mut game = new_game();
        let mv = Move::new(0, 0, game.current_player().label().clone());
        game.process_move(mv);
        game.toggle_player();

        game.reset_game();
        assert_eq!(game.current_player().label().as_str(), "O");
        assert!(game.board().cell(0, 0).is_unplaced());
    }
}
