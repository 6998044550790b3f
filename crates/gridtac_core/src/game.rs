//! The game state machine.
//!
//! [`Game`] owns the board, the current player, the move history and the
//! status. Every transition completes inside one `&mut self` call, so the
//! state can be tested without any renderer attached.

use crate::contracts::{Contract, PlaceContract, UndoContract, assert_post};
use crate::{
    Board, BoardSize, GameError, GameSnapshot, Line, Move, Player, Rejection, Square, Transition,
    ai, rules,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// A line was completed.
    Won {
        /// The winner.
        winner: Player,
        /// The line to highlight.
        line: Line,
    },
    /// The board filled with no complete line.
    Tied,
}

impl GameStatus {
    /// True for `Won` and `Tied`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the outcome of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, line } => Some(Outcome::Winner {
                player: *winner,
                line: line.clone(),
            }),
            GameStatus::Tied => Some(Outcome::Tie),
        }
    }
}

/// Outcome of a finished game, reported to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner {
        /// The winner.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// The board filled up.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, line } => write!(f, "Player {} wins on {}", player, line.kind()),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Generalized tic-tac-toe state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) history: Vec<Move>,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::X,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Rebuilds a game by placing `moves` in order.
    ///
    /// # Errors
    ///
    /// Fails if any move would be ignored or names the wrong player.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(size: BoardSize, moves: &[Move]) -> Result<Self, GameError> {
        let mut game = Self::new(size);
        for (position, mv) in moves.iter().enumerate() {
            if mv.player != game.current_player {
                return Err(GameError::ReplayWrongPlayer {
                    position,
                    expected: game.current_player,
                    found: mv.player,
                });
            }
            if let Transition::Ignored(rejection) = game.place_mark(mv.index) {
                return Err(GameError::ReplayRejected {
                    position,
                    rejection,
                });
            }
        }
        Ok(game)
    }

    /// Reinitializes to an empty `size x size` board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self, size: BoardSize) {
        info!(%size, "Resetting game");
        *self = Self::new(size);
    }

    /// Places the current player's mark at `index`.
    ///
    /// Ignored without any state change when the game is over, the cell is
    /// taken, or the index is off the board. After a placement the board is
    /// checked for a win, then for a tie; only a non-terminal move passes the
    /// turn.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_mark(&mut self, index: usize) -> Transition {
        if let Err(rejection) = PlaceContract::pre(self, &index) {
            debug!(%rejection, "Placement ignored");
            return Transition::Ignored(rejection);
        }

        let mv = Move::new(index, self.current_player);
        self.history.push(mv);
        self.board.set(index, Square::Occupied(mv.player));

        let transition = if let Some((winner, line)) = rules::winning_line(&self.board) {
            info!(%winner, line = %line, "Game won");
            self.status = GameStatus::Won {
                winner,
                line: line.clone(),
            };
            Transition::Won {
                last: mv,
                winner,
                line,
            }
        } else if rules::is_full(&self.board) {
            info!("Game tied");
            self.status = GameStatus::Tied;
            Transition::Tied(mv)
        } else {
            self.current_player = self.current_player.opponent();
            Transition::Placed(mv)
        };

        assert_post::<PlaceContract, _>(self);
        transition
    }

    /// Takes back the most recent move.
    ///
    /// The popped player moves again and the game always returns to
    /// `InProgress`, whichever move was undone. Returns `None` with an empty
    /// history.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Move> {
        if let Err(rejection) = UndoContract::pre(self, &()) {
            debug!(%rejection, "Undo ignored");
            return None;
        }

        let mv = self.history.pop()?;
        self.board.set(mv.index, Square::Empty);
        self.current_player = mv.player;
        self.status = GameStatus::InProgress;
        debug!(undone = %mv, "Move undone");

        assert_post::<UndoContract, _>(self);
        Some(mv)
    }

    /// Places the current player's mark on the lowest-index empty cell.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Transition {
        match ai::first_empty(&self.board) {
            Some(index) => self.place_mark(index),
            None => Transition::Ignored(Rejection::GameOver),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the player to move (or the last mover once the game is over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match &self.status {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// True when the game ended in a tie.
    pub fn is_tied(&self) -> bool {
        self.status == GameStatus::Tied
    }

    /// True once the game is won or tied.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the line to highlight after a win.
    pub fn winning_line(&self) -> Option<&Line> {
        match &self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Returns a read-only snapshot for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(n: usize) -> Game {
        Game::new(BoardSize::new(n).unwrap())
    }

    #[test]
    fn test_new_game_defaults() {
        let game = game(3);
        assert_eq!(game.current_player(), Player::X);
        assert!(game.history().is_empty());
        assert_eq!(game.status(), &GameStatus::InProgress);
    }

    #[test]
    fn test_place_flips_player() {
        let mut game = game(3);
        let transition = game.place_mark(4);
        assert_eq!(transition, Transition::Placed(Move::new(4, Player::X)));
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut game = game(3);
        let before = game.clone();
        assert_eq!(
            game.place_mark(9),
            Transition::Ignored(Rejection::OutOfBounds { index: 9 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_terminal_move_keeps_player() {
        let mut game = game(3);
        for index in [0, 3, 1, 4] {
            game.place_mark(index);
        }
        let transition = game.place_mark(2);
        assert!(matches!(transition, Transition::Won { winner: Player::X, .. }));
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_placement_after_win_ignored() {
        let mut game = game(3);
        for index in [0, 3, 1, 4, 2] {
            game.place_mark(index);
        }
        let before = game.clone();
        assert_eq!(game.place_mark(8), Transition::Ignored(Rejection::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut game = game(3);
        assert_eq!(game.undo(), None);
        assert_eq!(game, self::game(3));
    }

    #[test]
    fn test_undo_restores_popped_player() {
        let mut game = game(3);
        game.place_mark(0);
        game.place_mark(1);
        assert_eq!(game.undo(), Some(Move::new(1, Player::O)));
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.board().get(1), Some(Square::Empty));
    }

    #[test]
    fn test_reset_changes_size() {
        let mut game = game(3);
        game.place_mark(0);
        game.reset(BoardSize::new(5).unwrap());
        assert_eq!(game.board().squares().len(), 25);
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_computer_move_picks_lowest_empty() {
        let mut game = game(3);
        game.place_mark(0);
        let transition = game.computer_move();
        assert_eq!(transition, Transition::Placed(Move::new(1, Player::O)));
    }

    #[test]
    fn test_replay_rejects_wrong_player() {
        let moves = [Move::new(0, Player::O)];
        let err = Game::replay(BoardSize::default(), &moves).unwrap_err();
        assert_eq!(
            err,
            GameError::ReplayWrongPlayer {
                position: 0,
                expected: Player::X,
                found: Player::O,
            }
        );
    }

    #[test]
    fn test_replay_rejects_occupied() {
        let moves = [Move::new(0, Player::X), Move::new(0, Player::O)];
        let err = Game::replay(BoardSize::default(), &moves).unwrap_err();
        assert!(matches!(
            err,
            GameError::ReplayRejected {
                position: 1,
                rejection: Rejection::Occupied { index: 0 },
            }
        ));
    }

    #[test]
    fn test_saved_game_rebuilds_through_replay() {
        let mut original = game(3);
        for index in [4, 0, 8] {
            original.place_mark(index);
        }
        let json = serde_json::to_value(&original).unwrap();
        let moves: Vec<Move> = serde_json::from_value(json["history"].clone()).unwrap();
        let rebuilt = Game::replay(original.size(), &moves).unwrap();
        assert_eq!(rebuilt, original);
    }
}
