//! Keymap
//!
//! Key bindings for the PIN pad mapped to actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Entry
    InsertChar(char),
    Erase,
    ClearAll,

    // Focus
    FocusLeft,
    FocusRight,

    // View
    ToggleMask,

    // Application
    Submit,
    Quit,

    // No action
    None,
}

/// Map key event to action while the PIN pad is active
pub fn pin_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearAll,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Tab, _) => Action::ToggleMask,
        (KeyCode::Backspace, _) => Action::Erase,
        (KeyCode::Left, _) => Action::FocusLeft,
        (KeyCode::Right, _) => Action::FocusRight,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_digits_insert() {
        assert_eq!(pin_action(key(KeyCode::Char('7'))), Action::InsertChar('7'));
        assert_eq!(pin_action(key(KeyCode::Char('a'))), Action::InsertChar('a'));
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(pin_action(key(KeyCode::Backspace)), Action::Erase);
        assert_eq!(pin_action(key_ctrl(KeyCode::Char('u'))), Action::ClearAll);
        assert_eq!(pin_action(key(KeyCode::Left)), Action::FocusLeft);
        assert_eq!(pin_action(key(KeyCode::Right)), Action::FocusRight);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(pin_action(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(pin_action(key_ctrl(KeyCode::Char('c'))), Action::Quit);
        assert_eq!(pin_action(key_ctrl(KeyCode::Char('x'))), Action::None);
    }
}
