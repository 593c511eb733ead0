//! Quote form state machine
//!
//! [`QuoteForm`] owns one [`FormState`] for the lifetime of a form view and
//! drives it with the pure controllers:
//!
//! ```text
//! Editing --(submit, all valid)--> Submitted --(next edit)--> Editing
//! ```
//!
//! A rejected submit stays in the current phase and only replaces the error
//! map. An accepted one clears every value and error.
//!
//! Copyright (c) 2025 Quoteform Team
//! Licensed under the Apache-2.0 license

pub mod controller;
pub mod event;
pub mod state;
pub mod submission;

pub use controller::{live_error, on_field_change, on_submit, validate_all};
pub use event::{EventOutcome, FormEvent, SubmitOutcome};
pub use state::{FormPhase, FormState};
pub use submission::AcceptedSubmission;

use crate::error::Result;
use crate::fields::{FieldErrors, FieldName, FieldValues};
use crate::sink::SubmissionSink;
use crate::validation::ValidationFailure;
use tracing::{debug, info, warn};

/// A single quote request form and its state
#[derive(Debug, Clone, Default)]
pub struct QuoteForm {
    state: FormState,
}

impl QuoteForm {
    /// Empty form in the `Editing` phase
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing state
    pub fn from_state(state: FormState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn fields(&self) -> &FieldValues {
        &self.state.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.state.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.state.phase()
    }

    pub fn is_submitted(&self) -> bool {
        self.state.submitted
    }

    /// Store a new value for one field and re-run its live check.
    ///
    /// Any edit returns the form to `Editing`.
    pub fn change_field(&mut self, field: FieldName, value: &str) -> Option<&str> {
        let (fields, errors) = on_field_change(&self.state.fields, &self.state.errors, field, value);
        self.state.fields = fields;
        self.state.errors = errors;
        self.state.submitted = false;
        self.state.errors.get(field)
    }

    /// Validate everything and, if it all passes, accept and reset.
    ///
    /// A rejected submit leaves `submitted` as it was, so a form still in
    /// `Submitted` can carry errors. Check [`FormState::errors`] before
    /// showing the confirmation.
    pub fn submit(&mut self) -> std::result::Result<AcceptedSubmission, ValidationFailure> {
        match on_submit(&self.state.fields) {
            Ok(accepted) => {
                self.complete();
                info!("Quote request accepted");
                Ok(accepted)
            }
            Err(failure) => {
                self.state.errors = failure.errors.clone();
                debug!(invalid_fields = failure.errors.len(), "Quote request needs correction");
                Err(failure)
            }
        }
    }

    /// Like [`QuoteForm::submit`], handing the accepted snapshot to `sink`
    /// before the form is reset.
    ///
    /// If the sink fails the form keeps its values and stays in `Editing`.
    pub fn submit_to(&mut self, sink: &mut dyn SubmissionSink) -> Result<SubmitOutcome> {
        let accepted = match on_submit(&self.state.fields) {
            Ok(accepted) => accepted,
            Err(failure) => {
                self.state.errors = failure.errors.clone();
                return Ok(SubmitOutcome::Rejected(failure));
            }
        };

        if let Err(err) = sink.deliver(&accepted) {
            warn!(sink = sink.name(), error = %err, "Delivery of quote request failed");
            return Err(err);
        }

        info!(sink = sink.name(), "Quote request delivered");
        self.complete();
        Ok(SubmitOutcome::Accepted(accepted))
    }

    /// Apply one input event
    pub fn apply(&mut self, event: FormEvent) -> EventOutcome {
        match event {
            FormEvent::FieldChanged { field, value } => {
                let error = self.change_field(field, &value).map(str::to_string);
                EventOutcome::Edited { field, error }
            }
            FormEvent::Submit => EventOutcome::Submitted {
                outcome: self.submit().into(),
            },
        }
    }

    /// Discard everything and start over
    pub fn reset(&mut self) {
        self.state = FormState::new();
    }

    fn complete(&mut self) {
        self.state.fields.clear();
        self.state.errors.clear();
        self.state.submitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sink::MemorySink;

    fn fill_valid(form: &mut QuoteForm) {
        form.change_field(FieldName::Name, "Jane Doe");
        form.change_field(FieldName::Email, "jane@x.com");
        form.change_field(FieldName::Phone, "0412345678");
        form.change_field(FieldName::Postcode, "3000");
        form.change_field(FieldName::Service, "single-oven");
    }

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        fn deliver(&mut self, _submission: &AcceptedSubmission) -> Result<()> {
            Err(Error::delivery("failing", "mailbox unavailable"))
        }
    }

    #[test]
    fn test_new_form_is_editing_and_empty() {
        let form = QuoteForm::new();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.fields().is_empty());
        assert!(!form.errors().has_errors());
    }

    #[test]
    fn test_change_field_reports_live_error() {
        let mut form = QuoteForm::new();
        assert_eq!(
            form.change_field(FieldName::Email, "jane"),
            Some("Please enter a valid email address")
        );
        assert_eq!(form.change_field(FieldName::Email, "jane@x.com"), None);
    }

    #[test]
    fn test_accepted_submit_resets_form() {
        let mut form = QuoteForm::new();
        fill_valid(&mut form);

        let accepted = form.submit().unwrap();
        assert_eq!(accepted.fields.get(FieldName::Name), "Jane Doe");
        assert!(form.fields().is_empty());
        assert!(!form.errors().has_errors());
        assert!(form.is_submitted());
        assert_eq!(form.phase(), FormPhase::Submitted);
    }

    #[test]
    fn test_rejected_submit_keeps_fields() {
        let mut form = QuoteForm::new();
        fill_valid(&mut form);
        form.change_field(FieldName::Postcode, "30");
        let before = form.fields().clone();

        let failure = form.submit().unwrap_err();
        assert_eq!(
            failure.message_for(FieldName::Postcode),
            Some("Please enter a valid 4-digit postcode")
        );
        assert_eq!(form.fields(), &before);
        assert_eq!(form.errors(), &failure.errors);
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_rejected_resubmit_keeps_submitted_phase_with_errors() {
        let mut form = QuoteForm::new();
        fill_valid(&mut form);
        form.submit().unwrap();

        let failure = form.submit().unwrap_err();
        assert_eq!(failure.errors.len(), 5);
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert_eq!(form.errors().len(), 5);
        assert!(form.fields().is_empty());
    }

    #[test]
    fn test_edit_after_submit_returns_to_editing() {
        let mut form = QuoteForm::new();
        fill_valid(&mut form);
        form.submit().unwrap();

        form.change_field(FieldName::Name, "J");
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_submit_to_delivers_then_resets() {
        let mut form = QuoteForm::new();
        let mut sink = MemorySink::new();
        fill_valid(&mut form);

        let outcome = form.submit_to(&mut sink).unwrap();
        assert!(outcome.is_accepted());
        assert_eq!(sink.submissions().len(), 1);
        assert!(form.is_submitted());
    }

    #[test]
    fn test_submit_to_rejected_does_not_deliver() {
        let mut form = QuoteForm::new();
        let mut sink = MemorySink::new();

        let outcome = form.submit_to(&mut sink).unwrap();
        assert!(!outcome.is_accepted());
        assert!(sink.submissions().is_empty());
        assert_eq!(form.errors().len(), 5);
    }

    #[test]
    fn test_submit_to_failed_delivery_keeps_values() {
        let mut form = QuoteForm::new();
        fill_valid(&mut form);

        let err = form.submit_to(&mut FailingSink).unwrap_err();
        assert!(matches!(err, Error::Delivery { .. }));
        assert_eq!(form.fields().get(FieldName::Postcode), "3000");
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_apply_events() {
        let mut form = QuoteForm::new();
        let outcome = form.apply(FormEvent::field_changed(FieldName::Phone, "1234"));
        assert_eq!(
            outcome,
            EventOutcome::Edited {
                field: FieldName::Phone,
                error: Some("Please enter a valid Australian phone number".to_string()),
            }
        );

        match form.apply(FormEvent::Submit) {
            EventOutcome::Submitted {
                outcome: SubmitOutcome::Rejected(failure),
            } => assert!(failure.errors.has_error(FieldName::Phone)),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_reset() {
        let mut form = QuoteForm::new();
        fill_valid(&mut form);
        form.reset();
        assert_eq!(form.state(), &FormState::new());
    }
}
