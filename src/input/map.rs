//! Key mapping - arrow keys to logical directions

use crossterm::event::KeyCode;

use crate::types::Direction;

/// Map a key to a logical direction.
///
/// Only the four arrow keys map; everything else returns `None` and no
/// callback is invoked for it.
pub fn map_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}
