//! Moves, rejections and transitions.
//!
//! A [`Move`] is the history record of one placement. A [`Transition`]
//! is what the state machine reports back after a call, including the
//! terminal outcomes a front end reacts to.

use crate::{Line, Outcome, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A placement: the player and the cell they marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Board index of the marked cell.
    pub index: usize,
    /// The player who marked it.
    pub player: Player,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Why a request was ignored. Ignoring never changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Rejection {
    /// The game is already won or tied.
    #[display("Game is already over")]
    GameOver,

    /// The target cell is taken.
    #[display("Square {} is already occupied", index)]
    Occupied {
        /// Requested index.
        index: usize,
    },

    /// The index is outside the board.
    #[display("Square {} is off the board", index)]
    OutOfBounds {
        /// Requested index.
        index: usize,
    },

    /// Undo was requested with an empty history.
    #[display("Nothing to undo")]
    NothingToUndo,

    /// The request came from a player who is not to move.
    #[display("It's not this player's turn")]
    OutOfTurn,
}

/// Result of asking the state machine to place a mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Nothing happened.
    Ignored(Rejection),
    /// The mark was placed and the turn passed to the opponent.
    Placed(Move),
    /// The mark completed a line.
    Won {
        /// The winning placement.
        last: Move,
        /// The winner.
        winner: Player,
        /// First complete line in enumeration order.
        line: Line,
    },
    /// The mark filled the board without completing a line.
    Tied(Move),
}

impl Transition {
    /// Returns the terminal outcome, if this transition ended the game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Transition::Won { winner, line, .. } => Some(Outcome::Winner {
                player: *winner,
                line: line.clone(),
            }),
            Transition::Tied(_) => Some(Outcome::Tie),
            Transition::Ignored(_) | Transition::Placed(_) => None,
        }
    }

    /// Returns the placed move, if any.
    pub fn placed(&self) -> Option<Move> {
        match self {
            Transition::Placed(mv) | Transition::Tied(mv) => Some(*mv),
            Transition::Won { last, .. } => Some(*last),
            Transition::Ignored(_) => None,
        }
    }

    /// True when the request was ignored.
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored(_))
    }
}
