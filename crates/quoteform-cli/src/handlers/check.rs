//! Single-field check handler

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use quoteform_core::{live_error, FieldName};
use serde::Serialize;
use tracing::{debug, instrument};

/// Machine-readable result of a field check
#[derive(Debug, Serialize)]
struct CheckReport {
    field: FieldName,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

/// Handle the check command.
///
/// Runs the same rule the form applies while the user types, so an empty
/// value is always reported as fine.
#[instrument(skip_all, fields(field = %args.field))]
pub fn handle_check(args: CheckArgs, output: &mut OutputWriter) -> Result<()> {
    let field: FieldName = args.field.parse()?;
    let error = live_error(field, &args.value);
    debug!(valid = error.is_none(), "Field checked");

    let report = CheckReport {
        field,
        valid: error.is_none(),
        error,
    };

    if !output.is_human() {
        return output.data(&report);
    }

    match report.error {
        None if args.value.is_empty() => output.success(&format!("✓ {} is empty (not checked until submit)", field)),
        None => output.success(&format!("✓ {} looks good", field)),
        Some(message) => output.error(&format!("✗ {}: {}", field, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::error::Error;

    fn args(field: &str, value: &str) -> CheckArgs {
        CheckArgs {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    fn sink_writer(format: OutputFormat) -> OutputWriter {
        OutputWriter::with_writer(format, false, false, Box::new(std::io::sink()))
    }

    #[test]
    fn test_invalid_value_is_not_an_error() {
        let mut output = sink_writer(OutputFormat::Human);
        assert!(handle_check(args("postcode", "30"), &mut output).is_ok());
        assert!(handle_check(args("phone", ""), &mut output).is_ok());
    }

    #[test]
    fn test_unknown_field() {
        let mut output = sink_writer(OutputFormat::Json);
        let err = handle_check(args("fullName", "Jane"), &mut output).unwrap_err();
        assert!(matches!(err, Error::Core(quoteform_core::Error::UnknownField { .. })));
    }

    #[test]
    fn test_report_serialization() {
        let report = CheckReport {
            field: FieldName::PreferredDate,
            valid: true,
            error: None,
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"field": "preferredDate", "valid": true})
        );
    }
}
