//! History replay invariant: replaying history rebuilds the board.

use super::Invariant;
use crate::{Board, Game, Square};

/// Invariant: Replaying the move history on an empty board reproduces
/// the current board exactly.
///
/// Each replayed move must land on an empty square.
pub struct HistoryReplayInvariant;

impl Invariant<Game> for HistoryReplayInvariant {
    fn holds(game: &Game) -> bool {
        let mut board = Board::new(game.size());
        for mv in game.history() {
            if !board.is_empty(mv.index) {
                return false;
            }
            board.set(mv.index, Square::Occupied(mv.player));
        }
        &board == game.board()
    }

    fn description() -> &'static str {
        "Replaying history reproduces the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryReplayInvariant::holds(&Game::default()));
    }

    #[test]
    fn test_holds_through_win_and_undo() {
        let mut game = Game::default();
        for index in [0, 4, 1, 5, 2] {
            game.place_mark(index);
            assert!(HistoryReplayInvariant::holds(&game));
        }
        game.undo();
        assert!(HistoryReplayInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut game = Game::default();
        game.place_mark(0);
        game.history.push(Move::new(0, Player::O));
        assert!(!HistoryReplayInvariant::holds(&game));
    }

    #[test]
    fn test_cleared_square_violates() {
        let mut game = Game::default();
        game.place_mark(3);
        game.board.set(3, Square::Empty);
        assert!(!HistoryReplayInvariant::holds(&game));
    }
}
