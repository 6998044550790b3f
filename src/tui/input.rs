//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Direction),
    /// Place a mark under the cursor.
    Place,
    /// Place a mark at a specific index.
    PlaceAt(usize),
    /// Take back the last move.
    Undo,
    /// Start a new game with the current settings.
    Restart,
    /// Start a new game one size larger.
    Grow,
    /// Start a new game one size smaller.
    Shrink,
    /// Toggle single-player mode and start a new game.
    ToggleMode,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action for a board of side `size`.
///
/// Digits 1-9 address cells directly only while the whole board fits.
pub fn action_for(key: KeyCode, size: usize) -> Option<Action> {
    let action = match key {
        KeyCode::Up | KeyCode::Char('k') => Action::Cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Cursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::Cursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Cursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Place,
        KeyCode::Char('u') => Action::Undo,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::Grow,
        KeyCode::Char('-') => Action::Shrink,
        KeyCode::Char('m') => Action::ToggleMode,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            if digit == 0 || digit > size * size || size * size > 9 {
                return None;
            }
            Action::PlaceAt(digit - 1)
        }
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one step, stopping at the board edge.
pub fn move_cursor(cursor: usize, size: usize, direction: Direction) -> usize {
    let (row, col) = (cursor / size, cursor % size);
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(size - 1), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(size - 1)),
    };
    row * size + col
}
