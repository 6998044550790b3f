//! Pure game logic for generalized tic-tac-toe.
//!
//! The board is a flat `N x N` grid and the win length always equals `N`.
//! Everything here is synchronous and free of I/O so front ends can drive
//! the state machine directly and render from read-only snapshots.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`BoardSize`]
//! - **Rules**: winning-line enumeration and full-board detection
//! - **Game**: the owned state machine ([`Game`]) with place, undo and reset
//! - **Session**: the UI-facing controller with player names and
//!   single-player mode
//!
//! # Example
//!
//! ```
//! use gridtac_core::{BoardSize, Game, Player, Transition};
//!
//! # fn example() -> Result<(), gridtac_core::GameError> {
//! let mut game = Game::new(BoardSize::new(3)?);
//! for index in [0, 4, 1, 5] {
//!     game.place_mark(index);
//! }
//! let transition = game.place_mark(2);
//! assert!(matches!(transition, Transition::Won { winner: Player::X, .. }));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod contracts;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use action::{Move, Rejection, Transition};
pub use ai::first_empty;
pub use contracts::{Contract, PlaceContract, UndoContract, assert_post};
pub use error::GameError;
pub use game::{Game, GameStatus, Outcome};
pub use rules::{Line, LineKind, winning_line, winning_lines};
pub use session::{COMPUTER_NAME, DEFAULT_O_NAME, DEFAULT_X_NAME, Roster, Session, StartRequest};
pub use snapshot::GameSnapshot;
pub use types::{Board, BoardSize, Player, Square};
