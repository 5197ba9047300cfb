//! Per-field validation messages for inline form display

use std::collections::BTreeMap;

/// Validation messages keyed by field name
///
/// Purely presentational state: a host renders the messages for a field
/// under that field's input, if there are any. Iteration order is stable so
/// rendering does not jump around between frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    /// Drop all messages for one field
    pub fn clear(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// Drop everything
    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    /// Messages for a field, empty when the field is clean
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a field has any messages
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with messages
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// All fields and their messages, in stable order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
