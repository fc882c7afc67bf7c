//! Keyboard-to-command mapping.
//!
//! Owns the key bindings so the rest of the app never inspects raw
//! `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};

/// High-level outcome of one key press.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Acknowledge the educational notice.
    DismissNotice,
    /// Type a digit into the focused pick cell.
    Digit(char),
    /// Clear the focused pick cell.
    ClearDigit,
    /// Move pick focus left.
    FocusPrev,
    /// Move pick focus right.
    FocusNext,
    /// Press the start control.
    StartDraw,
    /// No meaningful command.
    None,
}

/// Translate a key event, taking the notice overlay into account. While the
/// notice is up the only commands are acknowledging it or quitting.
pub fn handle_key(key: KeyEvent, notice_open: bool) -> KeyAction {
    if notice_open {
        return match key.code {
            KeyCode::Enter => KeyAction::DismissNotice,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::StartDraw,
        KeyCode::Left | KeyCode::BackTab => KeyAction::FocusPrev,
        KeyCode::Right | KeyCode::Tab => KeyAction::FocusNext,
        KeyCode::Backspace | KeyCode::Delete => KeyAction::ClearDigit,
        KeyCode::Char(ch) if ch.is_ascii_digit() => KeyAction::Digit(ch),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_digits_map_to_digit_commands() {
        for ch in '0'..='9' {
            assert_eq!(handle_key(key(KeyCode::Char(ch)), false), KeyAction::Digit(ch));
        }
    }

    #[test]
    fn test_non_digit_chars_are_ignored() {
        assert_eq!(handle_key(key(KeyCode::Char('x')), false), KeyAction::None);
        assert_eq!(handle_key(key(KeyCode::Char('-')), false), KeyAction::None);
    }

    #[test]
    fn test_notice_swallows_game_keys() {
        assert_eq!(handle_key(key(KeyCode::Char('5')), true), KeyAction::None);
        assert_eq!(handle_key(key(KeyCode::Enter), true), KeyAction::DismissNotice);
        assert_eq!(handle_key(key(KeyCode::Esc), true), KeyAction::Quit);
    }

    #[test]
    fn test_start_and_quit_bindings() {
        assert_eq!(handle_key(key(KeyCode::Enter), false), KeyAction::StartDraw);
        assert_eq!(handle_key(key(KeyCode::Char('s')), false), KeyAction::StartDraw);
        assert_eq!(handle_key(key(KeyCode::Char('q')), false), KeyAction::Quit);
    }
}
