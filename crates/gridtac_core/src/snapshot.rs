//! Read-only view of a game for rendering and export.

use crate::{Game, Move, Player};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Side length.
    pub size: usize,
    /// Cells in row-major order; `None` is empty.
    pub cells: Vec<Option<Player>>,
    /// Player to move (last mover once the game is over).
    pub current_player: Player,
    /// Winner, if any.
    pub winner: Option<Player>,
    /// True when the board filled with no winner.
    pub tied: bool,
    /// Cells of the line to highlight after a win.
    pub winning_line: Option<Vec<usize>>,
    /// Move history, oldest first.
    pub history: Vec<Move>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            size: game.size().get(),
            cells: game.board().squares().iter().map(|s| s.player()).collect(),
            current_player: game.current_player(),
            winner: game.winner(),
            tied: game.is_tied(),
            winning_line: game.winning_line().map(|line| line.cells().to_vec()),
            history: game.history().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_after_win() {
        let mut game = Game::default();
        for index in [0, 4, 1, 5, 2] {
            game.place_mark(index);
        }
        let snapshot = game.snapshot();
        assert_eq!(snapshot.winner, Some(Player::X));
        assert_eq!(snapshot.winning_line, Some(vec![0, 1, 2]));
        assert_eq!(snapshot.cells[4], Some(Player::O));
        assert_eq!(snapshot.cells[8], None);
        assert!(!snapshot.tied);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut game = Game::default();
        game.place_mark(0);
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["size"], 3);
        assert_eq!(json["cells"][0], "X");
        assert_eq!(json["current_player"], "O");
        assert_eq!(json["history"][0]["index"], 0);
    }
}
