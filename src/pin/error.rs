//! PIN entry errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    #[error("field not found: {id}")]
    ElementNotFound { id: String },

    #[error("slot {index} out of range (length {len})")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("not a digit: {0:?}")]
    InvalidDigit(char),

    #[error("invalid PIN length {0} (expected 1..=12)")]
    InvalidLength(usize),
}

impl PinError {
    pub fn not_found(index: usize) -> Self {
        Self::ElementNotFound { id: super::field_id(index) }
    }
}
