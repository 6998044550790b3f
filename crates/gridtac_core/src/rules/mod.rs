//! Game rules for generalized tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the state machine so invariants and front ends can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{Line, LineKind, winning_line, winning_lines};
