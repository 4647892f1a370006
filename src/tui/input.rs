//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use timetravel_core::Position;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (column, row) = (cursor.column(), cursor.row());
    let (column, row) = match key {
        KeyCode::Left => (column.saturating_sub(1), row),
        KeyCode::Right => ((column + 1).min(2), row),
        KeyCode::Up => (column, row.saturating_sub(1)),
        KeyCode::Down => (column, (row + 1).min(2)),
        _ => (column, row),
    };
    Position::from_coordinates(column, row).unwrap_or(cursor)
}

/// Maps the digit keys 1-9 to board positions.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}
