//! Error types for game construction and replay.
//!
//! Player actions never produce these. Illegal placements and undos are
//! reported as [`Transition::Ignored`](crate::Transition::Ignored) or `None`.

use crate::{Player, Rejection};
use derive_more::{Display, Error};

/// Errors raised while building a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Board size of zero.
    #[display("Board size must be at least 1, got {}", size)]
    InvalidBoardSize {
        /// Requested side length.
        size: usize,
    },

    /// A replayed move was not accepted by the state machine.
    #[display("Replay move #{} was rejected: {}", position, rejection)]
    ReplayRejected {
        /// Zero-based position in the move list.
        position: usize,
        /// Why the state machine ignored it.
        rejection: Rejection,
    },

    /// A replayed move was recorded for the wrong player.
    #[display("Replay move #{} belongs to {}, but {} was to move", position, found, expected)]
    ReplayWrongPlayer {
        /// Zero-based position in the move list.
        position: usize,
        /// Player the state machine expected.
        expected: Player,
        /// Player recorded in the move.
        found: Player,
    },
}
