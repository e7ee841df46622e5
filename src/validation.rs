//! Field-level validation for form submissions.
//!
//! Transactions and goals are validated before they reach their stores.
//! Validation is all-or-nothing: a record with any invalid field is rejected
//! entirely and every offending field is reported, so forms can render an
//! inline message next to each input.

use std::fmt::Display;

/// A validation failure for a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The form field name, e.g. "amount".
    pub field: &'static str,
    /// The message to display next to the field.
    pub message: &'static str,
}

/// The collected validation failures for a form submission.
///
/// Build one with [ValidationErrors::new] and [ValidationErrors::push], then
/// convert it into a `Result` with [ValidationErrors::into_result].
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Create an empty error collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a validation failure for `field`.
    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    /// Whether any field failed validation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The message recorded for `field`, if that field failed validation.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    /// Iterate over the recorded failures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Return `Ok(value)` if no field failed validation, `Err(self)` otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .0
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "{messages}")
    }
}
