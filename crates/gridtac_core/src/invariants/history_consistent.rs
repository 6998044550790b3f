//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::Game;

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.history().len() == game.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
