//! Key mapping for cursor and history navigation.

use crossterm::event::KeyCode;
use strictly_tictactoe::BoardSize;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: usize, size: BoardSize, key: KeyCode) -> usize {
    let n = size.get();
    let (row, col) = (cursor / n, cursor % n);

    match key {
        KeyCode::Right if col + 1 < n => cursor + 1,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Down if row + 1 < n => cursor + n,
        KeyCode::Up if row > 0 => cursor - n,
        // No change for other keys or edge cases
        _ => cursor,
    }
}

/// Moves the highlighted history step with Up/Down within `0..len`.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down if selected + 1 < len => selected + 1,
        _ => selected,
    }
}
