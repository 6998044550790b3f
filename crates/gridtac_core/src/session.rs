//! UI-facing session controller.
//!
//! A front end forwards cell activations, undo requests and start requests
//! here and renders from the read-only accessors. The session adds player
//! names and single-player mode on top of [`Game`].

use crate::{BoardSize, Game, GameSnapshot, Move, Outcome, Player, Rejection, Transition};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default display name for X.
pub const DEFAULT_X_NAME: &str = "Player X";
/// Default display name for O.
pub const DEFAULT_O_NAME: &str = "Player O";
/// Display name for O in single-player mode.
pub const COMPUTER_NAME: &str = "Computer";

/// Settings for a fresh game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct StartRequest {
    /// Board side length.
    pub size: BoardSize,
    /// Name for X; empty means the default.
    #[setters(into)]
    pub player_x_name: String,
    /// Name for O; empty means the default. Ignored in single-player mode.
    #[setters(into)]
    pub player_o_name: String,
    /// Whether O is played by the computer.
    pub single_player: bool,
}

/// Display names for both players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Roster {
    /// Name shown for X.
    x_name: String,
    /// Name shown for O.
    o_name: String,
}

impl Roster {
    /// Derives names from a start request.
    pub fn from_request(request: &StartRequest) -> Self {
        let x_name = non_empty_or(&request.player_x_name, DEFAULT_X_NAME);
        let o_name = if request.single_player {
            COMPUTER_NAME.to_string()
        } else {
            non_empty_or(&request.player_o_name, DEFAULT_O_NAME)
        };
        Self { x_name, o_name }
    }

    /// Returns the display name for a player.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x_name,
            Player::O => &self.o_name,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::from_request(&StartRequest::default())
    }
}

fn non_empty_or(name: &str, default: &str) -> String {
    if name.is_empty() {
        default.to_string()
    } else {
        name.to_string()
    }
}

/// A game plus the configuration chosen at start.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    roster: Roster,
    single_player: bool,
    computer_pending: bool,
}

impl Session {
    /// Starts a session with the given settings.
    #[instrument(skip(request), fields(size = %request.size, single_player = request.single_player))]
    pub fn new(request: &StartRequest) -> Self {
        Self {
            game: Game::new(request.size),
            roster: Roster::from_request(request),
            single_player: request.single_player,
            computer_pending: false,
        }
    }

    /// Resets the board and stores names and mode.
    #[instrument(skip(self, request), fields(size = %request.size, single_player = request.single_player))]
    pub fn on_start_requested(&mut self, request: &StartRequest) {
        info!("Starting new game");
        self.game.reset(request.size);
        self.roster = Roster::from_request(request);
        self.single_player = request.single_player;
        self.computer_pending = false;
    }

    /// Places the current player's mark for a user click.
    ///
    /// Ignored while the computer's reply is pending.
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, index: usize) -> Transition {
        if self.computer_pending {
            debug!("Computer reply pending, click ignored");
            return Transition::Ignored(Rejection::OutOfTurn);
        }
        let transition = self.game.place_mark(index);
        self.computer_pending = self.single_player
            && matches!(transition, Transition::Placed(_))
            && self.game.current_player() == Player::O;
        transition
    }

    /// Takes back the most recent move.
    ///
    /// Cancels any pending computer reply. The computer does not answer on
    /// its own afterwards; the next click plays for whoever is to move.
    #[instrument(skip(self))]
    pub fn on_undo_requested(&mut self) -> Option<Move> {
        self.computer_pending = false;
        self.game.undo()
    }

    /// Switches single-player mode. Names update on the next start.
    #[instrument(skip(self))]
    pub fn set_single_player(&mut self, enabled: bool) {
        self.single_player = enabled;
        if !enabled {
            self.computer_pending = false;
        }
    }

    /// True when the front end should schedule the computer's reply.
    pub fn computer_should_move(&self) -> bool {
        self.computer_pending
    }

    /// Plays the computer's reply.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Transition {
        if !self.computer_pending {
            return Transition::Ignored(Rejection::OutOfTurn);
        }
        self.computer_pending = false;
        self.game.computer_move()
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the player names.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// True when O is played by the computer.
    pub fn single_player(&self) -> bool {
        self.single_player
    }

    /// Returns a read-only snapshot for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Status line naming the player to move.
    pub fn status_line(&self) -> String {
        format!(
            "Current Player: {}",
            self.roster.name(self.game.current_player())
        )
    }

    /// Message announcing a finished game.
    pub fn announcement(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Winner { player, .. } => format!("{} wins!", self.roster.name(*player)),
            Outcome::Tie => "It's a tie!".to_string(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&StartRequest::default())
    }
}
