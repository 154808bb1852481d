//! Application State
//!
//! Ties the PIN widget, its field surface, and the UI together.

mod config;
mod input;

use ratatui::Frame;
use tracing::info;
use zeroize::Zeroizing;

use crate::pin::{validate_length, FieldSet, PinEntry, PinError};
use crate::ui::components::layout::split_footer;
use crate::ui::components::{HelpBar, MessageType, PinDialog, StatusLine};

pub use config::{AppConfig, CliArgs};

pub struct App {
    pub config: AppConfig,
    pub pin: PinEntry<FieldSet>,
    pub masked: bool,
    pub message: Option<(String, MessageType)>,
    pub submitted: Option<Zeroizing<String>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, PinError> {
        let len = validate_length(config.pin_length)?;
        let pin = PinEntry::new(FieldSet::new(len), len)?.digits_only(config.digits_only);
        info!(length = config.pin_length, "pin pad ready");

        Ok(Self {
            masked: config.masked,
            config,
            pin,
            message: None,
            submitted: None,
            should_quit: false,
        })
    }

    pub fn filled(&self) -> usize {
        self.pin.surface().fields().iter().filter(|f| !f.is_empty()).count()
    }

    /// Identifier of the focused field, e.g. `codefield_2`.
    pub fn focused_field_id(&self) -> Option<&str> {
        let index = self.pin.focused()?;
        self.pin.surface().fields().get(index).map(|f| f.id())
    }

    pub fn set_message(&mut self, msg: impl Into<String>, msg_type: MessageType) {
        self.message = Some((msg.into(), msg_type));
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn render(&self, frame: &mut Frame) {
        let (body, status_area, help_area) = split_footer(frame.area());
        let prompt = if self.config.digits_only {
            format!("Enter {}-digit PIN:", self.pin.len())
        } else {
            format!("Enter {}-character code:", self.pin.len())
        };

        let mut dialog = PinDialog::new(" PIN ", &prompt, self.pin.surface().fields())
            .focused(self.pin.focused())
            .masked(self.masked);
        if let Some((ref msg, MessageType::Error)) = self.message {
            dialog = dialog.error(msg);
        }
        frame.render_widget(dialog, body);

        let mut status = StatusLine::new(self.masked).progress(self.filled(), self.pin.len());
        if let Some((ref msg, msg_type)) = self.message {
            status = status.message(msg, msg_type);
        }
        frame.render_widget(status, status_area);
        frame.render_widget(HelpBar::for_pin(), help_area);
    }
}
