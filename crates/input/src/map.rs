//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrow keys and vi keys move; `q` and Ctrl+C quit. Anything else is `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(GameAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(GameAction::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(GameAction::MoveRight),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Raw mode swallows SIGINT, so Ctrl+C is handled here as well.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key acknowledges the game-over screen.
pub fn is_confirm(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
