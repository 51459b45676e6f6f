//! Key mapping from terminal events to movement directions.

use crate::types::HorizontalDirection;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the horizontal direction it controls.
///
/// `A`/`D` are the primary keys; the arrow keys are aliases.
pub fn direction_for_key(code: KeyCode) -> Option<HorizontalDirection> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(HorizontalDirection::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(HorizontalDirection::Right)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
