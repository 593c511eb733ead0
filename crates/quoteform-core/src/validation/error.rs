//! Validation failure types
//!
//! Copyright (c) 2025 Quoteform Team
//! Licensed under the Apache-2.0 license

use crate::fields::{FieldErrors, FieldName};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single field that failed validation, with the message to show next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub struct FieldValidationError {
    /// Field that failed
    pub field: FieldName,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FieldValidationError {
    /// Create a new field validation error
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A rejected submission, carrying the freshly computed error map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub struct ValidationFailure {
    /// Every field that failed, keyed by field
    pub errors: FieldErrors,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quote request has {} invalid field(s):", self.errors.len())?;
        for (field, message) in self.errors.iter() {
            write!(f, "\n  - {}: {}", field, message)?;
        }
        Ok(())
    }
}

impl ValidationFailure {
    /// Wrap an error map
    pub fn new(errors: FieldErrors) -> Self {
        Self { errors }
    }

    /// The failures as individual errors, in display order
    pub fn field_errors(&self) -> Vec<FieldValidationError> {
        self.errors
            .iter()
            .map(|(field, message)| FieldValidationError::new(field, message))
            .collect()
    }

    /// Message for one field, if it failed
    pub fn message_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }
}
