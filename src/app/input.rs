use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::{debug, info, warn};

use crate::input::{pin_action, Action};
use crate::pin::PinError;
use crate::ui::components::MessageType;

use super::App;

impl App {
    /// Applies a key press. Returns true once the app should exit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let action = pin_action(key);
        let before = self.pin.focused();
        if let Err(err) = self.execute_action(action) {
            warn!(error = %err, "pin action failed");
            self.set_message(err.to_string(), MessageType::Error);
        }
        if self.pin.focused() != before {
            debug!(field = self.focused_field_id().unwrap_or("none"), "focus changed");
        }
        self.should_quit
    }

    fn execute_action(&mut self, action: Action) -> Result<(), PinError> {
        match action {
            Action::InsertChar(c) => {
                self.clear_message();
                self.pin.enter_digit(c)?;
            }
            Action::Erase => {
                self.clear_message();
                self.pin.erase()?;
            }
            Action::ClearAll => {
                self.pin.clear()?;
                self.set_message("Cleared", MessageType::Info);
            }
            Action::FocusLeft => self.pin.focus_left()?,
            Action::FocusRight => self.pin.focus_right()?,
            Action::ToggleMask => self.masked = !self.masked,
            Action::Submit => self.submit()?,
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<(), PinError> {
        let Some(pin) = self.pin.pin()? else {
            let msg = format!("Enter all {} digits", self.pin.len());
            self.set_message(msg, MessageType::Warning);
            return Ok(());
        };
        info!(digits = pin.len(), "pin submitted");
        self.submitted = Some(pin);
        self.set_message("PIN entered", MessageType::Success);
        self.should_quit = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::app::AppConfig;

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_advances_focus() {
        let mut app = app();
        type_str(&mut app, "42");
        assert_eq!(app.pin.focused(), Some(2));
        assert_eq!(app.filled(), 2);
    }

    #[test]
    fn test_backspace_returns_to_previous_field() {
        let mut app = app();
        type_str(&mut app, "7");
        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.pin.focused(), Some(0));
        assert_eq!(app.pin.code()[1], "");
        assert_eq!(app.filled(), 1);
    }

    #[test]
    fn test_invalid_digit_sets_error() {
        let mut app = app();
        type_str(&mut app, "x");
        let (msg, msg_type) = app.message.clone().unwrap();
        assert_eq!(msg_type, MessageType::Error);
        assert!(msg.contains("not a digit"));
        assert_eq!(app.filled(), 0);

        type_str(&mut app, "1");
        assert!(app.message.is_none());
    }

    #[test]
    fn test_submit_incomplete_warns() {
        let mut app = app();
        type_str(&mut app, "12");
        assert!(!app.handle_key_event(key(KeyCode::Enter)));
        assert_eq!(app.message.as_ref().map(|m| m.1), Some(MessageType::Warning));
        assert!(app.submitted.is_none());
    }

    #[test]
    fn test_submit_complete_quits() {
        let mut app = app();
        type_str(&mut app, "2580");
        assert!(app.handle_key_event(key(KeyCode::Enter)));
        assert_eq!(app.submitted.as_deref().map(String::as_str), Some("2580"));
    }

    #[test]
    fn test_clear_and_toggle_mask() {
        let mut app = app();
        type_str(&mut app, "123");
        app.handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.filled(), 0);
        assert_eq!(app.pin.focused(), Some(0));

        assert!(app.masked);
        app.handle_key_event(key(KeyCode::Tab));
        assert!(!app.masked);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut release = key(KeyCode::Char('5'));
        release.kind = KeyEventKind::Release;
        assert!(!app.handle_key_event(release));
        assert_eq!(app.filled(), 0);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        assert!(app.handle_key_event(key(KeyCode::Esc)));
    }
}
