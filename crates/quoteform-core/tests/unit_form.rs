//! Unit tests for submission and the form state machine
//!
//! Scenarios follow a user filling in the quote form: valid submissions,
//! corrections after a rejected submit, and documents loaded from JSON/YAML.

use quoteform_core::{
    on_submit, EventOutcome, FieldName, FieldValues, FormEvent, FormPhase, MemorySink, QuoteForm, SubmitOutcome,
};
use serde_json::json;

fn valid_request() -> FieldValues {
    FieldValues::from_json_value(&json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "phone": "0412345678",
        "postcode": "3000",
        "service": "single-oven"
    }))
    .unwrap()
}

#[cfg(test)]
mod submission {
    use super::*;

    #[test]
    fn test_valid_request_is_accepted() {
        let accepted = on_submit(&valid_request()).unwrap();
        assert_eq!(accepted.fields, valid_request());
        assert_eq!(accepted.service_option().map(|s| s.label), Some("Single Oven Cleaning"));
    }

    #[test]
    fn test_optional_fields_may_be_empty_or_anything() {
        let fields = valid_request()
            .with(FieldName::PreferredDate, "")
            .with(FieldName::Message, "!!");
        assert!(on_submit(&fields).is_ok());
    }

    #[test]
    fn test_unknown_service_is_still_accepted() {
        let fields = valid_request().with(FieldName::Service, "bbq-grill");
        assert!(on_submit(&fields).is_ok());
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let fields = FieldValues::new()
            .with(FieldName::Name, "J")
            .with(FieldName::Email, "jane")
            .with(FieldName::Phone, "1234")
            .with(FieldName::Postcode, "30");

        let failure = on_submit(&fields).unwrap_err();
        let reported: Vec<_> = failure.field_errors().into_iter().map(|e| e.field).collect();
        assert_eq!(
            reported,
            vec![
                FieldName::Name,
                FieldName::Email,
                FieldName::Phone,
                FieldName::Postcode,
                FieldName::Service
            ]
        );
    }

    #[test]
    fn test_yaml_request_document() {
        let yaml = r#"
name: Sam Nguyen
email: sam@example.com.au
phone: "+61 3 9876 5432"
postcode: "3148"
service: move-out
preferred_date: "2025-02-14"
"#;
        let fields: FieldValues = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(fields.get(FieldName::PreferredDate), "2025-02-14");
        assert!(on_submit(&fields).is_ok());
    }

    #[test]
    fn test_yaml_unquoted_postcode_is_rejected_as_non_text() {
        let result: Result<FieldValues, _> = serde_yaml::from_str("postcode: 3000\n");
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod state_machine {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut form = QuoteForm::new();
        for (field, value) in valid_request().iter() {
            form.change_field(field, value);
        }
        assert_eq!(form.phase(), FormPhase::Editing);

        let accepted = form.submit().unwrap();
        assert_eq!(
            accepted.confirmation_message(),
            "Thank you Jane Doe! We'll get back to you within minutes with your quote."
        );
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert!(form.fields().is_empty());
        assert!(!form.errors().has_errors());

        form.change_field(FieldName::Name, "Another Customer");
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_correct_and_resubmit() {
        let mut form = QuoteForm::new();
        for (field, value) in valid_request().with(FieldName::Postcode, "30").iter() {
            form.change_field(field, value);
        }

        let failure = form.submit().unwrap_err();
        assert_eq!(
            failure.message_for(FieldName::Postcode),
            Some("Please enter a valid 4-digit postcode")
        );
        assert_eq!(form.fields().get(FieldName::Postcode), "30");

        form.change_field(FieldName::Postcode, "3000");
        assert!(!form.errors().has_errors());
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_resubmitting_empty_form_after_success_is_rejected() {
        let mut form = QuoteForm::new();
        for (field, value) in valid_request().iter() {
            form.change_field(field, value);
        }
        form.submit().unwrap();

        let failure = form.submit().unwrap_err();
        assert_eq!(failure.errors.len(), 5);
        // a rejected submit leaves the submitted flag as it was
        assert!(form.is_submitted());
    }

    #[test]
    fn test_event_script() {
        let events: Vec<FormEvent> = serde_json::from_value(json!([
            {"type": "field_changed", "field": "name", "value": "Jane Doe"},
            {"type": "field_changed", "field": "email", "value": "jane@x.com"},
            {"type": "field_changed", "field": "phone", "value": "0412345678"},
            {"type": "field_changed", "field": "postcode", "value": "3000"},
            {"type": "field_changed", "field": "service", "value": "cooktop"},
            {"type": "submit"}
        ]))
        .unwrap();

        let mut form = QuoteForm::new();
        let outcomes: Vec<_> = events.into_iter().map(|e| form.apply(e)).collect();

        assert!(matches!(
            outcomes.last(),
            Some(EventOutcome::Submitted {
                outcome: SubmitOutcome::Accepted(_)
            })
        ));
        assert!(form.is_submitted());
    }

    #[test]
    fn test_sink_receives_snapshot_before_reset() {
        let mut form = QuoteForm::new();
        let mut sink = MemorySink::new();
        for (field, value) in valid_request().iter() {
            form.change_field(field, value);
        }

        form.submit_to(&mut sink).unwrap();
        let delivered = sink.drain();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].fields, valid_request());
        assert!(form.fields().is_empty());
    }
}
