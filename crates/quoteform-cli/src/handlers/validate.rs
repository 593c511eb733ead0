//! Validate and submit command handlers

use super::load_request;
use crate::cli::RequestArgs;
use crate::error::{Error, Result};
use crate::logging::{redaction, timing::Timer};
use crate::output::OutputWriter;
use quoteform_core::{validate_all, FieldValues, MemorySink, QuoteForm, SubmitOutcome};
use tracing::{debug, info, instrument, warn};

/// Handle the validate command
#[instrument(skip_all, fields(file = %args.request_file.display()))]
pub fn handle_validate(args: RequestArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &format!("file: {}", args.request_file.display()));
    output.info(&format!("Validating quote request: {}", args.request_file.display()))?;

    let fields = load_request(&args.request_file)?;
    log_request(&fields);

    let errors = validate_all(&fields);
    output.field_errors(&errors)?;

    if errors.has_errors() {
        warn!(invalid_fields = errors.len(), "Quote request failed validation");
        return Err(Error::ValidationFailed { count: errors.len() });
    }

    info!("Quote request is valid");
    Ok(())
}

/// Handle the submit command.
///
/// Drives a fresh form with every value from the file, then submits it.
#[instrument(skip_all, fields(file = %args.request_file.display()))]
pub fn handle_submit(args: RequestArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("submit_command", &format!("file: {}", args.request_file.display()));
    output.info(&format!("Submitting quote request: {}", args.request_file.display()))?;

    let fields = load_request(&args.request_file)?;
    log_request(&fields);

    let mut form = QuoteForm::new();
    for (field, value) in fields.iter() {
        form.change_field(field, value);
    }

    let mut sink = MemorySink::new();
    match form.submit_to(&mut sink)? {
        SubmitOutcome::Accepted(submission) => {
            info!(delivered = sink.submissions().len(), "Quote request accepted");
            output.accepted(&submission)
        }
        SubmitOutcome::Rejected(failure) => {
            warn!(invalid_fields = failure.errors.len(), "Quote request rejected");
            output.field_errors(&failure.errors)?;
            Err(Error::ValidationFailed {
                count: failure.errors.len(),
            })
        }
    }
}

fn log_request(fields: &FieldValues) {
    if let Ok(mut value) = serde_json::to_value(fields) {
        redaction::redact_json_value(&mut value);
        debug!(request = %value, "Loaded quote request");
    }
}
