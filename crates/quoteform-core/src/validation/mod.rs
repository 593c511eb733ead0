//! Field validation for the quote request form
//!
//! - `validators`: the pure per-field pattern checks
//! - `error`: failure types returned to the presentation layer
//!
//! Copyright (c) 2025 Quoteform Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod validators;

pub use error::{FieldValidationError, ValidationFailure};
pub use validators::{validate_email, validate_name, validate_phone, validate_postcode, MIN_NAME_LENGTH};

use crate::fields::FieldName;

/// Check a single field's value against its validator.
///
/// Fields without a validator always pass.
pub fn check_field(field: FieldName, value: &str) -> bool {
    field.validator().map_or(true, |validate| validate(value))
}
