//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use opnpage_app::message::Message;
use opnpage_app::{InputKey, InputMouse};
use opnpage_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a primary-button crossterm MouseEvent to InputMouse
pub fn mouse_event_to_input(mouse: crossterm::event::MouseEvent) -> Option<InputMouse> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputMouse::down(column, row)),
        MouseEventKind::Drag(MouseButton::Left) => Some(InputMouse::drag(column, row)),
        MouseEventKind::Up(MouseButton::Left) => Some(InputMouse::up(column, row)),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if !event::poll(Duration::from_millis(50))? {
        return Ok(Some(Message::Tick));
    }

    let message = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_input(mouse).map(Message::Mouse),
        _ => None,
    };
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};
    use opnpage_app::MouseAction;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('d')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            Some(InputKey::Up)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(InputKey::Right)
        );
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_uppercase_reset_key() {
        let key = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('R')));
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_primary_button_mouse_events() {
        let down = mouse_event_to_input(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7));
        assert_eq!(down, Some(InputMouse::down(4, 7)));

        let drag = mouse_event_to_input(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 7));
        assert_eq!(drag.map(|m| m.action), Some(MouseAction::Drag));

        let up = mouse_event_to_input(mouse(MouseEventKind::Up(MouseButton::Left), 5, 8));
        assert_eq!(up.map(|m| m.position()), Some((5, 8)));
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        assert_eq!(
            mouse_event_to_input(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            None
        );
        assert_eq!(mouse_event_to_input(mouse(MouseEventKind::Moved, 0, 0)), None);
        assert_eq!(mouse_event_to_input(mouse(MouseEventKind::ScrollDown, 0, 0)), None);
    }
}
