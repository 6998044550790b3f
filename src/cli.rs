//! Command-line interface for gridtac.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// gridtac - generalized tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridtac")]
#[command(about = "Generalized tic-tac-toe on an N x N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./gridtac.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play(PlayArgs),

    /// Apply a list of cell indices and print the resulting game
    Replay {
        /// Board side length
        #[arg(short, long, default_value_t = 3)]
        size: usize,

        /// Print a JSON snapshot instead of the text board
        #[arg(long)]
        json: bool,

        /// Zero-based cell indices, alternating X and O
        moves: Vec<usize>,
    },

    /// Print the winning lines for a board size in evaluation order
    Lines {
        /// Board side length
        #[arg(short, long, default_value_t = 3)]
        size: usize,
    },
}

/// Options for an interactive game. Each one overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Board side length
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Let the computer play O
    #[arg(long)]
    pub single_player: bool,

    /// Display name for X
    #[arg(long)]
    pub player_x: Option<String>,

    /// Display name for O
    #[arg(long)]
    pub player_o: Option<String>,
}
