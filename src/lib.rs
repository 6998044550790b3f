//! gridtac - generalized tic-tac-toe in the terminal
//!
//! The game logic lives in [`gridtac_core`]. This crate adds the
//! command line, configuration and the ratatui front end.
//!
//! # Architecture
//!
//! - **CLI**: `play`, `replay` and `lines` subcommands
//! - **Config**: optional `gridtac.toml`, overridden by flags
//! - **TUI**: keyboard-driven board with undo, restart and a
//!   first-empty-cell computer opponent

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod tui;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,gridtac=debug,gridtac_core=debug";

pub use cli::{Cli, Command, PlayArgs};
pub use config::{AppConfig, ConfigError, MAX_BOARD_SIZE};
pub use tui::{App, Effect, UiEvent, run_tui};
