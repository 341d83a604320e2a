//! Terminal event polling.
//!
//! Gameplay reads at most one key per tick without blocking; the game-over
//! screen blocks until the player confirms.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, is_confirm};
use crate::types::GameAction;

/// Read one pending key press, if any, and map it to an action.
///
/// Never blocks. Releases, repeats and non-key events are consumed and yield
/// `None`, as do unmapped keys.
pub fn poll_action() -> Result<Option<GameAction>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    Ok(press(event::read()?).and_then(handle_key_event))
}

/// Block until the player confirms (Enter).
pub fn wait_for_confirm() -> Result<()> {
    loop {
        if let Some(key) = press(event::read()?) {
            if is_confirm(key) {
                return Ok(());
            }
        }
    }
}

fn press(ev: Event) -> Option<KeyEvent> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_press_filters_kinds() {
        let down = KeyEvent::from(KeyCode::Down);
        assert_eq!(press(Event::Key(down)), Some(down));

        let release = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(press(Event::Key(release)), None);
        assert_eq!(press(Event::FocusGained), None);
        assert_eq!(press(Event::Resize(80, 24)), None);
    }
}
