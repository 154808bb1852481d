//! PIN Entry Widget
//!
//! Moves focus left to right across the fields as digits are typed and back
//! again on backspace. The surface owns the displayed values; `code` only
//! tracks slots released by `step_back`.

use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::{FieldSurface, PinError};

pub const DEFAULT_PIN_LENGTH: usize = 4;
pub const MAX_PIN_LENGTH: usize = 12;

/// Checks a slot count before anything is sized from it.
pub fn validate_length(len: usize) -> Result<usize, PinError> {
    if len == 0 || len > MAX_PIN_LENGTH {
        return Err(PinError::InvalidLength(len));
    }
    Ok(len)
}

#[derive(Debug)]
pub struct PinEntry<S: FieldSurface> {
    surface: S,
    code: Vec<String>,
    digits_only: bool,
}

impl<S: FieldSurface> PinEntry<S> {
    pub fn new(surface: S, len: usize) -> Result<Self, PinError> {
        let len = validate_length(len)?;
        Ok(Self {
            surface,
            code: vec![String::new(); len],
            digits_only: true,
        })
    }

    pub fn digits_only(mut self, digits_only: bool) -> Self {
        self.digits_only = digits_only;
        self
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn code(&self) -> &[String] {
        &self.code
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn focused(&self) -> Option<usize> {
        self.surface.focused()
    }

    fn current(&self) -> usize {
        self.surface.focused().unwrap_or(0).min(self.len() - 1)
    }

    fn check_slot(&self, index: usize) -> Result<(), PinError> {
        if index >= self.len() {
            return Err(PinError::SlotOutOfRange { index, len: self.len() });
        }
        Ok(())
    }

    /// Blanks every field from `from` to the end.
    ///
    /// A missing field does not stop the sweep; the first one found is
    /// returned once the remaining fields have been cleared.
    pub fn reset_value(&mut self, from: usize) -> Result<(), PinError> {
        let mut missing = None;
        for index in from..self.len() {
            if let Err(err) = self.surface.clear_value(index) {
                warn!(index, error = %err, "reset could not clear field");
                missing.get_or_insert(err);
            }
        }
        missing.map_or(Ok(()), Err)
    }

    /// Advances focus to `index + 1` and clears it, if `index` holds a value
    /// and is not the last slot. Returns whether focus moved.
    pub fn step_forward(&mut self, index: usize) -> Result<bool, PinError> {
        self.check_slot(index)?;
        if index + 1 == self.len() || !self.surface.is_filled(index)? {
            return Ok(false);
        }
        let next = index + 1;
        self.surface.focus(next)?;
        self.surface.clear_value(next)?;
        debug!(from = index, to = next, "focus advanced");
        Ok(true)
    }

    /// Releases slot `index` and returns focus to `index - 1`.
    /// Returns whether focus moved.
    pub fn step_back(&mut self, index: usize) -> Result<bool, PinError> {
        self.check_slot(index)?;
        if index == 0 {
            return Ok(false);
        }
        self.code[index].clear();
        self.surface.focus(index - 1)?;
        debug!(from = index, to = index - 1, "focus stepped back");
        Ok(true)
    }

    /// Writes `c` into the focused field and advances.
    pub fn enter_digit(&mut self, c: char) -> Result<bool, PinError> {
        if self.digits_only && !c.is_ascii_digit() {
            return Err(PinError::InvalidDigit(c));
        }
        let index = self.current();
        let mut utf8 = [0u8; 4];
        self.surface.set_value(index, c.encode_utf8(&mut utf8))?;
        self.step_forward(index)
    }

    /// Backspace: clear the focused field, or step back if it is already empty.
    pub fn erase(&mut self) -> Result<bool, PinError> {
        let index = self.current();
        if self.surface.is_filled(index)? {
            self.surface.clear_value(index)?;
            return Ok(true);
        }
        self.step_back(index)
    }

    pub fn focus_left(&mut self) -> Result<(), PinError> {
        let index = self.current();
        self.surface.focus(index.saturating_sub(1))
    }

    pub fn focus_right(&mut self) -> Result<(), PinError> {
        let index = self.current();
        self.surface.focus((index + 1).min(self.len() - 1))
    }

    /// Blanks every field and focuses the first one.
    pub fn clear(&mut self) -> Result<(), PinError> {
        self.reset_value(0)?;
        self.surface.focus(0)
    }

    pub fn is_complete(&self) -> Result<bool, PinError> {
        for index in 0..self.len() {
            if !self.surface.is_filled(index)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The entered PIN, once every field holds a value.
    pub fn pin(&self) -> Result<Option<Zeroizing<String>>, PinError> {
        if !self.is_complete()? {
            return Ok(None);
        }
        let mut pin = Zeroizing::new(String::with_capacity(self.len()));
        for index in 0..self.len() {
            pin.push_str(self.surface.value(index)?);
        }
        Ok(Some(pin))
    }
}
