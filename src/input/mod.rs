//! Input Module
//!
//! Maps keyboard input onto PIN pad actions.

pub mod keymap;

// Re-exports
pub use keymap::{pin_action, Action};
