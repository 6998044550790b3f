//! First-class invariants for the game state machine.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are checked in debug builds and tested on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod history_consistent;
pub mod history_replay;
pub mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use history_replay::HistoryReplayInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    HistoryReplayInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    StatusConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Player, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(GameInvariants::check_all(&Game::default()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_undo() {
        let mut game = Game::default();
        for index in [0, 4, 2, 1] {
            game.place_mark(index);
        }
        game.undo();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = Game::default();
        game.place_mark(4);
        game.board.set(0, Square::Occupied(Player::O));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        // Replay and count both break; turn order and status do not.
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryReplayInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&Game::default()).is_ok());
    }
}
