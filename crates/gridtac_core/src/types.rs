//! Core domain types: players, squares and the flat board.

use crate::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Side length of a square board.
///
/// Always at least 1. The win length equals the side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Creates a board size.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] for 0.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self(size))
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the number of cells (`size²`).
    pub fn cells(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = GameError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Square board stored in row-major order.
///
/// Index `i` is row `i / size`, column `i % size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the square at the given index, or `None` when off the board.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Writes a square. Out-of-range indices are ignored and return `false`.
    pub(crate) fn set(&mut self, index: usize, square: Square) -> bool {
        match self.squares.get_mut(index) {
            Some(slot) => {
                *slot = square;
                true
            }
            None => false,
        }
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Converts a flat index to `(row, column)`.
    pub fn row_col(&self, index: usize) -> Option<(usize, usize)> {
        let n = self.size.get();
        (index < self.squares.len()).then(|| (index / n, index % n))
    }

    /// Converts `(row, column)` to a flat index.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.size.get();
        (row < n && col < n).then(|| row * n + col)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based index so a player can type it.
    pub fn display(&self) -> String {
        let n = self.size.get();
        let width = self.squares.len().to_string().len();
        let mut result = String::new();
        for row in 0..n {
            for col in 0..n {
                let pos = row * n + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&format!("{:>width$}", symbol));
                if col + 1 < n {
                    result.push('|');
                }
            }
            if row + 1 < n {
                let rule = vec!["-".repeat(width); n].join("+");
                result.push('\n');
                result.push_str(&rule);
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
