//! UI Components
//!
//! TUI widgets for the PIN pad.

pub mod layout;
pub mod pin_dialog;
pub mod statusline;

// Re-exports
pub use pin_dialog::PinDialog;
pub use statusline::{HelpBar, MessageType, StatusLine};
