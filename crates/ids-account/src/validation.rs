//! Field-keyed validation messages.

use std::collections::BTreeMap;

use serde::Serialize;

/// Key for messages that belong to the form as a whole.
pub const ROOT_KEY: &str = "";

/// Validation messages keyed by field name.
///
/// Messages under [`ROOT_KEY`] are form-level. Messages keep their insertion
/// order within each field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding the given form-level messages.
    #[must_use]
    pub fn root<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut errors = Self::new();
        for message in messages {
            errors.add_root(message);
        }
        errors
    }

    /// Adds a message to a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Adds a form-level message.
    pub fn add_root(&mut self, message: impl Into<String>) {
        self.add(ROOT_KEY, message);
    }

    /// Returns the messages for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map_or(&[], Vec::as_slice)
    }

    /// Returns the form-level messages.
    #[must_use]
    pub fn form_level(&self) -> &[String] {
        self.get(ROOT_KEY)
    }

    /// Returns true if there are no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(Vec::is_empty)
    }

    /// Returns the total number of messages across all fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Iterates over `(field, messages)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}
