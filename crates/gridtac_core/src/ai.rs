//! Computer opponent that picks the first available square.

use crate::Board;

/// Returns the lowest-index empty square on the board.
pub fn first_empty(board: &Board) -> Option<usize> {
    (0..board.squares().len()).find(|&index| board.is_empty(index))
}
