use std::io;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Event;

/// Block until the terminal produces something the core cares about.
///
/// Returns `Ok(None)` for events with no meaning here (mouse, focus, key
/// releases) so the caller can simply read again.
pub fn read_event() -> io::Result<Option<Event>> {
    let event = match event::read()? {
        TermEvent::Key(key_event) => key_token(&key_event).map(Event::KeyPress),
        TermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    };
    Ok(event)
}

/// Canonical token for a key press: `"j"`, `" "`, `"ctrl+c"`, `"enter"`, `"f5"`.
pub fn key_token(key_event: &KeyEvent) -> Option<String> {
    // Some terminals report releases/repeats too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let name = match key_event.code {
        KeyCode::Char(c) if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(format!("ctrl+{}", c.to_ascii_lowercase()));
        }
        KeyCode::Char(c) if key_event.modifiers.contains(KeyModifiers::ALT) => {
            return Some(format!("alt+{c}"));
        }
        KeyCode::Char(c) => return Some(c.to_string()),
        KeyCode::F(n) => return Some(format!("f{n}")),
        KeyCode::Enter => "enter",
        KeyCode::Esc => "esc",
        KeyCode::Backspace => "backspace",
        KeyCode::Tab => "tab",
        KeyCode::BackTab => "shift+tab",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::PageUp => "pgup",
        KeyCode::PageDown => "pgdown",
        KeyCode::Delete => "delete",
        KeyCode::Insert => "insert",
        _ => return None,
    };
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(code: KeyCode, modifiers: KeyModifiers) -> Option<String> {
        key_token(&KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_printable_keys() {
        assert_eq!(token(KeyCode::Char('q'), KeyModifiers::NONE).as_deref(), Some("q"));
        assert_eq!(token(KeyCode::Char(' '), KeyModifiers::NONE).as_deref(), Some(" "));
        assert_eq!(token(KeyCode::Char(':'), KeyModifiers::SHIFT).as_deref(), Some(":"));
        assert_eq!(token(KeyCode::Char('Q'), KeyModifiers::SHIFT).as_deref(), Some("Q"));
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(token(KeyCode::Char('c'), KeyModifiers::CONTROL).as_deref(), Some("ctrl+c"));
        assert_eq!(token(KeyCode::Char('X'), KeyModifiers::CONTROL).as_deref(), Some("ctrl+x"));
        assert_eq!(token(KeyCode::Char('f'), KeyModifiers::ALT).as_deref(), Some("alt+f"));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(token(KeyCode::Up, KeyModifiers::NONE).as_deref(), Some("up"));
        assert_eq!(token(KeyCode::Down, KeyModifiers::NONE).as_deref(), Some("down"));
        assert_eq!(token(KeyCode::Enter, KeyModifiers::NONE).as_deref(), Some("enter"));
        assert_eq!(token(KeyCode::Esc, KeyModifiers::NONE).as_deref(), Some("esc"));
        assert_eq!(token(KeyCode::F(5), KeyModifiers::NONE).as_deref(), Some("f5"));
    }

    #[test]
    fn test_release_is_dropped() {
        let release = KeyEvent::new_with_kind(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(key_token(&release), None);
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(token(KeyCode::CapsLock, KeyModifiers::NONE), None);
    }
}
