//! Field Surface
//!
//! The capability a `PinEntry` drives: a row of addressable fields with a
//! string value each and a single focus.

use zeroize::Zeroizing;

use super::PinError;

/// Identifier of the field backing slot `index`.
pub fn field_id(index: usize) -> String {
    format!("codefield_{index}")
}

/// Trait for anything that owns the PIN fields
pub trait FieldSurface {
    fn value(&self, index: usize) -> Result<&str, PinError>;
    fn set_value(&mut self, index: usize, value: &str) -> Result<(), PinError>;
    fn focus(&mut self, index: usize) -> Result<(), PinError>;
    fn focused(&self) -> Option<usize>;

    fn clear_value(&mut self, index: usize) -> Result<(), PinError> {
        self.set_value(index, "")
    }

    fn is_filled(&self, index: usize) -> Result<bool, PinError> {
        Ok(!self.value(index)?.is_empty())
    }
}

// ============================================================================
// Field - one slot on screen, value wiped on drop
// ============================================================================

#[derive(Debug, Clone)]
pub struct Field {
    id: String,
    value: Zeroizing<String>,
}

impl Field {
    fn new(index: usize) -> Self {
        Self {
            id: field_id(index),
            value: Zeroizing::new(String::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

// ============================================================================
// FieldSet - fixed row of fields indexed directly
// ============================================================================

#[derive(Debug, Clone)]
pub struct FieldSet {
    fields: Vec<Field>,
    focused: Option<usize>,
}

impl FieldSet {
    /// Builds `len` empty fields with focus on the first one.
    pub fn new(len: usize) -> Self {
        Self {
            fields: (0..len).map(Field::new).collect(),
            focused: if len > 0 { Some(0) } else { None },
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn field_mut(&mut self, index: usize) -> Result<&mut Field, PinError> {
        self.fields.get_mut(index).ok_or_else(|| PinError::not_found(index))
    }
}

impl FieldSurface for FieldSet {
    fn value(&self, index: usize) -> Result<&str, PinError> {
        self.fields
            .get(index)
            .map(Field::value)
            .ok_or_else(|| PinError::not_found(index))
    }

    fn set_value(&mut self, index: usize, value: &str) -> Result<(), PinError> {
        let field = self.field_mut(index)?;
        field.value.clear();
        field.value.push_str(value);
        Ok(())
    }

    fn focus(&mut self, index: usize) -> Result<(), PinError> {
        self.field_mut(index)?;
        self.focused = Some(index);
        Ok(())
    }

    fn focused(&self) -> Option<usize> {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids() {
        let set = FieldSet::new(4);
        let ids: Vec<&str> = set.fields().iter().map(Field::id).collect();
        assert_eq!(ids, ["codefield_0", "codefield_1", "codefield_2", "codefield_3"]);
    }

    #[test]
    fn test_new_focuses_first() {
        assert_eq!(FieldSet::new(4).focused(), Some(0));
        assert_eq!(FieldSet::new(0).focused(), None);
    }

    #[test]
    fn test_set_and_clear_value() {
        let mut set = FieldSet::new(2);
        set.set_value(1, "5").unwrap();
        assert_eq!(set.value(1).unwrap(), "5");
        assert!(set.is_filled(1).unwrap());

        set.clear_value(1).unwrap();
        assert_eq!(set.value(1).unwrap(), "");
    }

    #[test]
    fn test_missing_field() {
        let mut set = FieldSet::new(2);
        let err = PinError::ElementNotFound { id: "codefield_2".into() };
        assert_eq!(set.value(2).unwrap_err(), err);
        assert_eq!(set.set_value(2, "1").unwrap_err(), err);
        assert_eq!(set.focus(2).unwrap_err(), err);
        assert_eq!(set.focused(), Some(0));
    }
}
