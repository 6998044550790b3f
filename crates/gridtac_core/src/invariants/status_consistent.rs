//! Status consistency invariant: the recorded status agrees with the board.

use super::Invariant;
use crate::{Game, GameStatus, rules};

/// Invariant: The status matches what the rules say about the board.
///
/// - `InProgress`: no complete line and at least one empty square
/// - `Won`: the recorded line is the first complete line
/// - `Tied`: the board is a tie
pub struct StatusConsistentInvariant;

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::InProgress => {
                rules::winning_line(board).is_none() && !rules::is_full(board)
            }
            GameStatus::Won { winner, line } => {
                rules::winning_line(board).is_some_and(|(p, l)| p == *winner && &l == line)
            }
            GameStatus::Tied => rules::is_tie(board),
        }
    }

    fn description() -> &'static str {
        "Status agrees with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_holds() {
        let mut game = Game::default();
        game.place_mark(0);
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_undo_of_winning_move_holds() {
        let mut game = Game::default();
        for index in [0, 4, 1, 5, 2] {
            game.place_mark(index);
        }
        game.undo();
        assert_eq!(game.status(), &GameStatus::InProgress);
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stale_status_violates() {
        let mut game = Game::default();
        game.place_mark(0);
        game.status = GameStatus::Tied;
        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
