//! Contract-based validation for the state machine.
//!
//! Preconditions decide whether a request is ignored. Postconditions
//! check the invariant set and only run in debug builds.

use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::{Game, GameStatus, Rejection, Square};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Contract for placing a mark at a board index.
///
/// Preconditions:
/// - Game is not won or tied
/// - Index is on the board
/// - Square is empty
pub struct PlaceContract;

impl Contract<Game, usize> for PlaceContract {
    fn pre(game: &Game, index: &usize) -> Result<(), Rejection> {
        if game.is_over() {
            return Err(Rejection::GameOver);
        }
        match game.board().get(*index) {
            None => Err(Rejection::OutOfBounds { index: *index }),
            Some(Square::Occupied(_)) => Err(Rejection::Occupied { index: *index }),
            Some(Square::Empty) => Ok(()),
        }
    }

    fn post(after: &Game) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(after)
    }
}

/// Contract for taking back the last move.
///
/// Postconditions:
/// - Game is back in progress
/// - All game invariants hold
pub struct UndoContract;

impl Contract<Game, ()> for UndoContract {
    fn pre(game: &Game, _action: &()) -> Result<(), Rejection> {
        if game.history().is_empty() {
            Err(Rejection::NothingToUndo)
        } else {
            Ok(())
        }
    }

    fn post(after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GameInvariants::check_all(after).err().unwrap_or_default();
        if after.status() != &GameStatus::InProgress {
            violations.push(InvariantViolation::new(
                "Undo must return the game to in progress",
            ));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Panics in debug builds if the postconditions of `C` fail for `game`.
#[instrument(skip(game))]
pub fn assert_post<C, A>(game: &Game)
where
    C: Contract<Game, A>,
{
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = C::post(game) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Game invariants violated");
        panic!("Game invariants violated: {}", descriptions);
    }
}
