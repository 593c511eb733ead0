//! Replay command handler
//!
//! Feeds a scripted list of form events through a [`QuoteForm`] and reports
//! what each one did, the way the form would react to a real user.

use super::load_events;
use crate::cli::ReplayArgs;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use quoteform_core::{EventOutcome, FormPhase, FormState, QuoteForm, SubmitOutcome};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One replayed event, as emitted in machine-readable output
#[derive(Debug, Serialize)]
struct ReplayStep {
    step: usize,
    phase: FormPhase,
    #[serde(flatten)]
    outcome: EventOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<FormState>,
}

/// Handle the replay command
#[instrument(skip_all, fields(file = %args.events_file.display()))]
pub fn handle_replay(args: ReplayArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("replay_command", &format!("file: {}", args.events_file.display()));

    let events = load_events(&args.events_file)?;
    info!(events = events.len(), "Replaying form events");
    output.info(&format!("Replaying {} event(s) from {}", events.len(), args.events_file.display()))?;

    let steps = replay(&mut QuoteForm::new(), events, args.show_state);

    if !output.is_human() {
        return output.data(&steps);
    }

    for step in &steps {
        output.writeln(&describe(step))?;
        if let Some(state) = &step.state {
            output.form_state(state)?;
        }
    }

    let final_phase = steps.last().map(|s| s.phase).unwrap_or(FormPhase::Editing);
    output.section("Result")?;
    output.writeln(&format!("Final phase: {}", final_phase))
}

fn replay(form: &mut QuoteForm, events: Vec<quoteform_core::FormEvent>, show_state: bool) -> Vec<ReplayStep> {
    events
        .into_iter()
        .enumerate()
        .map(|(i, event)| {
            let outcome = form.apply(event);
            debug!(step = i + 1, phase = %form.phase(), "Applied event");
            ReplayStep {
                step: i + 1,
                phase: form.phase(),
                outcome,
                state: show_state.then(|| form.state().clone()),
            }
        })
        .collect()
}

fn describe(step: &ReplayStep) -> String {
    let detail = match &step.outcome {
        EventOutcome::Edited { field, error: None } => format!("✓ {} updated", field),
        EventOutcome::Edited {
            field,
            error: Some(message),
        } => format!("✗ {}: {}", field, message),
        EventOutcome::Submitted {
            outcome: SubmitOutcome::Accepted(submission),
        } => format!("✓ submitted: {}", submission.confirmation_message()),
        EventOutcome::Submitted {
            outcome: SubmitOutcome::Rejected(failure),
        } => {
            let fields = failure.errors.iter().map(|(f, _)| f.as_str()).collect::<Vec<_>>().join(", ");
            format!("✗ submit rejected: {} invalid field(s) ({})", failure.errors.len(), fields)
        }
    };
    format!("[{}] {}", step.step, detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoteform_core::{FieldName, FormEvent};

    fn valid_events() -> Vec<FormEvent> {
        vec![
            FormEvent::field_changed(FieldName::Name, "Jane Doe"),
            FormEvent::field_changed(FieldName::Email, "jane@x.com"),
            FormEvent::field_changed(FieldName::Phone, "0412345678"),
            FormEvent::field_changed(FieldName::Postcode, "300"),
            FormEvent::Submit,
            FormEvent::field_changed(FieldName::Postcode, "3000"),
            FormEvent::field_changed(FieldName::Service, "move-out"),
            FormEvent::Submit,
        ]
    }

    #[test]
    fn test_replay_phases() {
        let mut form = QuoteForm::new();
        let steps = replay(&mut form, valid_events(), false);

        assert_eq!(steps.len(), 8);
        assert_eq!(steps[4].phase, FormPhase::Editing);
        assert_eq!(steps[7].phase, FormPhase::Submitted);
        assert!(form.fields().is_empty());
        assert!(steps.iter().all(|s| s.state.is_none()));
    }

    #[test]
    fn test_describe_steps() {
        let steps = replay(&mut QuoteForm::new(), valid_events(), true);

        assert_eq!(describe(&steps[0]), "[1] ✓ name updated");
        assert_eq!(describe(&steps[3]), "[4] ✗ postcode: Please enter a valid 4-digit postcode");
        assert_eq!(
            describe(&steps[4]),
            "[5] ✗ submit rejected: 2 invalid field(s) (postcode, service)"
        );
        assert_eq!(
            describe(&steps[7]),
            "[8] ✓ submitted: Thank you Jane Doe! We'll get back to you within minutes with your quote."
        );
        assert_eq!(steps[4].state.as_ref().unwrap().errors.len(), 2);
    }

    #[test]
    fn test_step_serialization() {
        let steps = replay(&mut QuoteForm::new(), vec![FormEvent::field_changed(FieldName::Phone, "12")], false);
        assert_eq!(
            serde_json::to_value(&steps[0]).unwrap(),
            serde_json::json!({
                "step": 1,
                "phase": "editing",
                "event": "edited",
                "field": "phone",
                "error": "Please enter a valid Australian phone number"
            })
        );
    }
}
