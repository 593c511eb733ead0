//! Serialisable input events and their outcomes
//!
//! Copyright (c) 2025 Quoteform Team
//! Licensed under the Apache-2.0 license

use super::submission::AcceptedSubmission;
use crate::fields::FieldName;
use crate::validation::ValidationFailure;
use serde::{Deserialize, Serialize};

/// Something the user did to the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// Text in one field changed
    FieldChanged { field: FieldName, value: String },
    /// The submit control was triggered
    Submit,
}

impl FormEvent {
    pub fn field_changed(field: FieldName, value: impl Into<String>) -> Self {
        Self::FieldChanged {
            field,
            value: value.into(),
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Accepted(AcceptedSubmission),
    Rejected(ValidationFailure),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

impl From<Result<AcceptedSubmission, ValidationFailure>> for SubmitOutcome {
    fn from(result: Result<AcceptedSubmission, ValidationFailure>) -> Self {
        match result {
            Ok(accepted) => SubmitOutcome::Accepted(accepted),
            Err(failure) => SubmitOutcome::Rejected(failure),
        }
    }
}

/// What applying one [`FormEvent`] did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventOutcome {
    /// A field was updated; `error` is its live validation message, if any
    Edited { field: FieldName, error: Option<String> },
    /// A submit was attempted
    Submitted { outcome: SubmitOutcome },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_deserialization() {
        let events: Vec<FormEvent> = serde_json::from_value(json!([
            {"type": "field_changed", "field": "postcode", "value": "3000"},
            {"type": "field_changed", "field": "preferred_date", "value": "Friday"},
            {"type": "submit"}
        ]))
        .unwrap();

        assert_eq!(
            events,
            vec![
                FormEvent::field_changed(FieldName::Postcode, "3000"),
                FormEvent::field_changed(FieldName::PreferredDate, "Friday"),
                FormEvent::Submit,
            ]
        );
    }

    #[test]
    fn test_unknown_field_in_event_is_rejected() {
        let result = serde_json::from_value::<FormEvent>(json!(
            {"type": "field_changed", "field": "fullName", "value": "Jane"}
        ));
        assert!(result.is_err());
    }
}
