//! Tie detection.

use super::win::winning_line;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no complete line is a tie.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Player};

    fn fill(board: &mut Board, marks: &[Player]) {
        for (index, player) in marks.iter().enumerate() {
            board.set(index, Square::Occupied(*player));
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::default()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::default();
        board.set(4, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let mut board = Board::default();
        fill(&mut board, &[X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        let mut board = Board::new(BoardSize::new(2).unwrap());
        fill(&mut board, &[Player::X; 4]);
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
