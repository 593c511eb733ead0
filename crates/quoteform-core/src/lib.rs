//! Quoteform Core - validation and submission engine for the quote request form
//!
//! This crate holds the only logic behind the oven cleaning quote form:
//! per-field validation, live validation while the user types, the
//! exhaustive check on submit, and the small state machine tying them
//! together. It performs no I/O; accepted submissions are handed to a
//! [`SubmissionSink`] supplied by the caller.
//!
//! # Main Components
//!
//! - **Fields**: [`FieldName`], [`FieldValues`] and [`FieldErrors`]
//! - **Validators**: lenient pattern checks for name, email, phone and postcode
//! - **Controllers**: [`on_field_change`] and [`on_submit`], both pure
//! - **Form**: [`QuoteForm`], the `Editing`/`Submitted` state machine
//! - **Catalog**: the services and areas listed on the form
//!
//! # Example
//!
//! ```rust
//! use quoteform_core::{FieldName, QuoteForm};
//!
//! let mut form = QuoteForm::new();
//! form.change_field(FieldName::Name, "Jane Doe");
//! form.change_field(FieldName::Email, "jane@x.com");
//! form.change_field(FieldName::Phone, "0412 345 678");
//! form.change_field(FieldName::Postcode, "3000");
//! form.change_field(FieldName::Service, "single-oven");
//!
//! let accepted = form.submit().expect("all fields are valid");
//! assert_eq!(accepted.fields.get(FieldName::Postcode), "3000");
//! assert!(form.is_submitted());
//! assert!(form.fields().is_empty());
//! ```
//!
//! Copyright (c) 2025 Quoteform Team
//! Licensed under the Apache-2.0 license

pub mod catalog;
pub mod error;
pub mod fields;
pub mod form;
pub mod sink;
pub mod validation;

// Re-export main types for convenience
pub use catalog::{find_service, PriceGuide, ServiceOption, SERVICES, SERVICE_AREAS};
pub use error::{Error, Result};
pub use fields::{FieldErrors, FieldName, FieldValues};
pub use form::{
    live_error, on_field_change, on_submit, validate_all, AcceptedSubmission, EventOutcome, FormEvent, FormPhase,
    FormState, QuoteForm, SubmitOutcome,
};
pub use sink::{MemorySink, SubmissionSink};
pub use validation::{
    check_field, validate_email, validate_name, validate_phone, validate_postcode, FieldValidationError,
    ValidationFailure,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
