//! Win detection for an `N x N` board.

use crate::{Board, BoardSize, Player, Square};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which family a winning line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum LineKind {
    /// Row `r`, left to right.
    #[display("row {}", _0)]
    Row(usize),
    /// Column `c`, top to bottom.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// A set of board indices that wins when uniformly marked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    cells: Vec<usize>,
}

impl Line {
    /// Returns the line family.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the cell indices in order.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Checks whether the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    /// Returns the player owning every cell of the line, if any.
    fn owner(&self, board: &Board) -> Option<Player> {
        let (first, rest) = self.cells.split_first()?;
        let player = board.get(*first)?.player()?;
        rest.iter()
            .all(|&i| board.get(i) == Some(Square::Occupied(player)))
            .then_some(player)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.cells)
    }
}

/// Enumerates every winning line for a board of the given size.
///
/// Order is rows, then columns, then the down-right diagonal, then the
/// down-left diagonal. There are always `2N + 2` lines of length `N`.
#[instrument]
pub fn winning_lines(size: BoardSize) -> Vec<Line> {
    let n = size.get();
    let mut lines = Vec::with_capacity(2 * n + 2);

    for row in 0..n {
        lines.push(Line {
            kind: LineKind::Row(row),
            cells: (0..n).map(|col| row * n + col).collect(),
        });
    }

    for col in 0..n {
        lines.push(Line {
            kind: LineKind::Column(col),
            cells: (0..n).map(|row| row * n + col).collect(),
        });
    }

    lines.push(Line {
        kind: LineKind::Diagonal,
        cells: (0..n).map(|i| i * n + i).collect(),
    });
    lines.push(Line {
        kind: LineKind::AntiDiagonal,
        cells: (0..n).map(|i| i * n + (n - 1 - i)).collect(),
    });

    lines
}

/// Finds the first complete line on the board.
///
/// Returns the owning player and the line. When several lines complete at
/// once, only the first in enumeration order is reported.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    winning_lines(board.size())
        .into_iter()
        .find_map(|line| line.owner(board).map(|player| (player, line)))
}
