//! Application state and logic.
//!
//! `App` owns the [`Session`] and turns key presses and timer events into
//! state transitions. It never sleeps or spawns; delays come back as
//! [`Effect`]s for the event loop to schedule.

use super::input::{self, Action};
use crate::config::{self, AppConfig, ConfigError};
use crossterm::event::KeyCode;
use gridtac_core::{BoardSize, Outcome, Session, StartRequest, Transition};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Delayed events fed back into the app by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Time for the computer to reply.
    ComputerTurn {
        /// Epoch at scheduling time.
        epoch: u64,
    },
    /// Time to announce a finished game.
    Announce {
        /// Epoch at scheduling time.
        epoch: u64,
        /// How the game ended.
        outcome: Outcome,
    },
}

/// Side effects requested by the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `event` after `after` has elapsed.
    Schedule {
        /// Delay before delivery.
        after: Duration,
        /// Event to deliver.
        event: UiEvent,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Playing,
    /// The game ended; the announcement is scheduled.
    Finishing,
    /// The announcement is shown until the next key press.
    Announcing(String),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    request: StartRequest,
    cursor: usize,
    phase: Phase,
    message: String,
    epoch: u64,
    computer_delay: Duration,
    announce_delay: Duration,
    should_quit: bool,
}

impl App {
    /// Creates an app and starts the first game.
    #[instrument(skip(request))]
    pub fn new(request: StartRequest, computer_delay: Duration, announce_delay: Duration) -> Self {
        let session = Session::new(&request);
        let message = session.status_line();
        Self {
            session,
            request,
            cursor: 0,
            phase: Phase::Playing,
            message,
            epoch: 0,
            computer_delay,
            announce_delay,
            should_quit: false,
        }
    }

    /// Creates an app from configuration.
    ///
    /// # Errors
    ///
    /// Fails when the configured board size is out of range.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.start_request()?,
            config.computer_delay(),
            config.announce_delay(),
        ))
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Vec<Effect> {
        if let Phase::Announcing(_) = self.phase {
            if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
                self.should_quit = true;
            } else {
                self.restart();
            }
            return Vec::new();
        }

        match input::action_for(key, self.size().get()) {
            Some(action) => self.apply(action),
            None => Vec::new(),
        }
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Cursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, self.size().get(), direction);
                Vec::new()
            }
            Action::Place => self.activate(self.cursor),
            Action::PlaceAt(index) => {
                self.cursor = index;
                self.activate(index)
            }
            Action::Undo => {
                self.undo();
                Vec::new()
            }
            Action::Restart => {
                self.restart();
                Vec::new()
            }
            Action::Grow => {
                self.resize(self.size().get() + 1);
                Vec::new()
            }
            Action::Shrink => {
                self.resize(self.size().get().saturating_sub(1));
                Vec::new()
            }
            Action::ToggleMode => {
                self.request.single_player = !self.request.single_player;
                info!(single_player = self.request.single_player, "Mode toggled");
                self.restart();
                Vec::new()
            }
            Action::Quit => {
                self.should_quit = true;
                Vec::new()
            }
        }
    }

    /// Handles a delayed event. Events from an older epoch are dropped.
    #[instrument(skip(self))]
    pub fn handle_ui_event(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::ComputerTurn { epoch } if epoch == self.epoch => {
                let transition = self.session.play_computer_turn();
                if let Some(mv) = transition.placed() {
                    self.cursor = mv.index;
                }
                self.after_transition(transition)
            }
            UiEvent::Announce { epoch, outcome } if epoch == self.epoch => {
                let message = self.session.announcement(&outcome);
                info!(%message, "Announcing result");
                self.phase = Phase::Announcing(message);
                Vec::new()
            }
            stale => {
                debug!(?stale, current_epoch = self.epoch, "Dropping stale event");
                Vec::new()
            }
        }
    }

    fn activate(&mut self, index: usize) -> Vec<Effect> {
        let transition = self.session.on_cell_activated(index);
        self.after_transition(transition)
    }

    fn after_transition(&mut self, transition: Transition) -> Vec<Effect> {
        if let Transition::Ignored(rejection) = &transition {
            debug!(%rejection, "Request ignored");
            return Vec::new();
        }

        self.epoch += 1;

        if let Some(outcome) = transition.outcome() {
            self.phase = Phase::Finishing;
            self.message = "Game over".to_string();
            return vec![Effect::Schedule {
                after: self.announce_delay,
                event: UiEvent::Announce {
                    epoch: self.epoch,
                    outcome,
                },
            }];
        }

        self.message = self.session.status_line();
        if self.session.computer_should_move() {
            return vec![Effect::Schedule {
                after: self.computer_delay,
                event: UiEvent::ComputerTurn { epoch: self.epoch },
            }];
        }
        Vec::new()
    }

    fn undo(&mut self) {
        match self.session.on_undo_requested() {
            Some(mv) => {
                self.epoch += 1;
                self.phase = Phase::Playing;
                self.cursor = mv.index;
                self.message = self.session.status_line();
            }
            None => self.message = "Nothing to undo".to_string(),
        }
    }

    fn resize(&mut self, size: usize) {
        match config::screen_board_size(size) {
            Ok(size) => {
                self.request.size = size;
                self.restart();
            }
            Err(e) => self.message = e.message,
        }
    }

    /// Starts a new game with the current settings.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.on_start_requested(&self.request);
        self.epoch += 1;
        self.phase = Phase::Playing;
        self.cursor = self.cursor.min(self.request.size.cells() - 1);
        self.message = self.session.status_line();
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.session.game().size()
    }

    /// Returns the cursor index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the announcement while one is shown.
    pub fn announcement(&self) -> Option<&str> {
        match &self.phase {
            Phase::Announcing(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the current epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
