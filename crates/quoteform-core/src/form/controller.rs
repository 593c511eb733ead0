//! Live validation and submission controllers
//!
//! Both controllers are pure state transitions: they take the current values
//! and return new state without touching anything else.
//!
//! Copyright (c) 2025 Quoteform Team
//! Licensed under the Apache-2.0 license

use super::submission::AcceptedSubmission;
use crate::fields::{FieldErrors, FieldName, FieldValues};
use crate::validation::{check_field, ValidationFailure};
use tracing::{debug, trace};

/// Message live validation shows for `value`, if any.
///
/// Empty input is never flagged while the user is typing.
pub fn live_error(field: FieldName, value: &str) -> Option<&'static str> {
    if value.is_empty() || check_field(field, value) {
        None
    } else {
        field.error_message()
    }
}

/// Apply one edit: store the new value and recompute that field's error.
///
/// Other fields' values and errors are carried over untouched.
pub fn on_field_change(
    fields: &FieldValues,
    errors: &FieldErrors,
    field: FieldName,
    value: &str,
) -> (FieldValues, FieldErrors) {
    let mut fields = fields.clone();
    let mut errors = errors.clone();

    fields.set(field, value);
    match live_error(field, value) {
        Some(message) => errors.set(field, message),
        None => errors.clear_field(field),
    }

    trace!(field = %field, flagged = errors.has_error(field), "Field changed");
    (fields, errors)
}

/// Exhaustive check run on submit, ignoring any earlier live results.
///
/// A field fails when it is required and blank, or when it has text that
/// its validator rejects.
pub fn validate_all(fields: &FieldValues) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in FieldName::ALL {
        let value = fields.get(field);
        let missing = field.is_required() && value.trim().is_empty();
        let malformed = !value.is_empty() && !check_field(field, value);

        if missing || malformed {
            if let Some(message) = field.error_message() {
                errors.set(field, message);
            }
        }
    }

    errors
}

/// Decide whether the current values can be accepted.
///
/// Rejection carries the full fresh error map. Acceptance carries a snapshot
/// of the values; resetting the form is left to the caller.
pub fn on_submit(fields: &FieldValues) -> Result<AcceptedSubmission, ValidationFailure> {
    let errors = validate_all(fields);

    if errors.has_errors() {
        debug!(invalid_fields = errors.len(), "Submission rejected");
        return Err(ValidationFailure::new(errors));
    }

    debug!("Submission accepted");
    Ok(AcceptedSubmission::new(fields.clone()))
}
