//! Application configuration loaded from TOML.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use gridtac_core::{BoardSize, StartRequest};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "gridtac.toml";

/// Largest board side length the terminal UI renders.
pub const MAX_BOARD_SIZE: usize = 16;

/// Validates a board size for the terminal UI.
///
/// # Errors
///
/// Fails for 0 or anything above [`MAX_BOARD_SIZE`].
pub fn screen_board_size(size: usize) -> Result<BoardSize, ConfigError> {
    if size > MAX_BOARD_SIZE {
        return Err(ConfigError::new(format!(
            "Board size must be at most {} to fit on screen, got {}",
            MAX_BOARD_SIZE, size
        )));
    }
    BoardSize::new(size).map_err(|e| ConfigError::new(e.to_string()))
}

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Board side length.
    board_size: usize,

    /// Whether the computer plays O.
    single_player: bool,

    /// Display name for X.
    player_x_name: String,

    /// Display name for O.
    player_o_name: String,

    /// Pause before the computer replies, in milliseconds.
    computer_delay_ms: u64,

    /// Pause before a win or tie is announced, in milliseconds.
    announce_delay_ms: u64,

    /// File receiving logs while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            single_player: false,
            player_x_name: gridtac_core::DEFAULT_X_NAME.to_string(),
            player_o_name: gridtac_core::DEFAULT_O_NAME.to_string(),
            computer_delay_ms: 500,
            announce_delay_ms: 100,
            log_file: PathBuf::from("gridtac.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else `gridtac.toml` if it exists, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, args: &PlayArgs) -> Self {
        if let Some(size) = args.size {
            self.board_size = size;
        }
        if args.single_player {
            self.single_player = true;
        }
        if let Some(name) = &args.player_x {
            self.player_x_name = name.clone();
        }
        if let Some(name) = &args.player_o {
            self.player_o_name = name.clone();
        }
        self
    }

    /// Builds the start request for the first game.
    ///
    /// # Errors
    ///
    /// Fails when the board size is out of range.
    #[instrument(skip(self))]
    pub fn start_request(&self) -> Result<StartRequest, ConfigError> {
        let size = screen_board_size(self.board_size)
            .map_err(|e| ConfigError::new(format!("Invalid board_size: {}", e.message)))?;
        Ok(StartRequest::default()
            .with_size(size)
            .with_player_x_name(self.player_x_name.clone())
            .with_player_o_name(self.player_o_name.clone())
            .with_single_player(self.single_player))
    }

    /// Pause before the computer replies.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Pause before a win or tie is announced.
    pub fn announce_delay(&self) -> Duration {
        Duration::from_millis(self.announce_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
