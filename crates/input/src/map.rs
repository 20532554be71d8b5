//! Key mapping from terminal events to ship controls.

use crate::types::Controls;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map one key press to a directional delta and/or fire trigger.
pub fn key_to_controls(key: KeyEvent) -> Option<Controls> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Controls::new(-1, 0, false)),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Controls::new(1, 0, false)),
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Controls::new(0, -1, false)),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Controls::new(0, 1, false)),

        KeyCode::Char(' ') => Some(Controls::new(0, 0, true)),

        _ => None,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
