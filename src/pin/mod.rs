//! PIN Module
//!
//! Segmented PIN entry: the widget logic and the field surface it drives.

pub mod error;
pub mod surface;
pub mod widget;

// Re-exports
pub use error::PinError;
pub use surface::{field_id, FieldSet, FieldSurface};
pub use widget::{validate_length, PinEntry, DEFAULT_PIN_LENGTH};
