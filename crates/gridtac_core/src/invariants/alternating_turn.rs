//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and the current player must be
/// the opponent of the last mover. Once the game is over the turn does not
/// pass, so the current player is the last mover instead.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let Some(last) = history.last() else {
            return game.current_player() == Player::X;
        };

        if history[0].player != Player::X {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected = if game.is_over() {
            last.player
        } else {
            last.player.opponent()
        };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::default()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = Game::default();
        for index in [0, 4, 8, 2, 6] {
            game.place_mark(index);
            assert!(AlternatingTurnInvariant::holds(&game));
        }
    }

    #[test]
    fn test_holds_after_win() {
        let mut game = Game::default();
        for index in [0, 4, 1, 5, 2] {
            game.place_mark(index);
        }
        assert!(game.is_over());
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::default();
        game.place_mark(0);
        game.history.push(Move::new(1, Player::X));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_current_player_violates() {
        let mut game = Game::default();
        game.place_mark(0);
        game.current_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
