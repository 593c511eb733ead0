//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with dedicated
//! rendering for field errors, accepted submissions and the service list.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::logging::redaction;
use colored::Colorize;
use quoteform_core::{AcceptedSubmission, FieldErrors, FormState, ServiceOption};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for form types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the error map of a rejected submission
    fn format_field_errors(&self, errors: &FieldErrors) -> Result<String>;

    /// Format an accepted submission with its confirmation message
    fn format_accepted(&self, submission: &AcceptedSubmission) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // Human output falls back to pretty JSON for arbitrary data
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_field_errors(&self, errors: &FieldErrors) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_field_errors_human(errors)),
            _ => self.format(&serde_json::json!({ "valid": errors.is_empty(), "errors": errors })),
        }
    }

    fn format_accepted(&self, submission: &AcceptedSubmission) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_accepted_human(submission)),
            _ => self.format(&serde_json::json!({
                "accepted": true,
                "submission": submission,
                "confirmation": submission.confirmation_message(),
            })),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(format: OutputFormat, use_color: bool, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Whether human-readable output is selected
    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", redaction::redact_sensitive(message));

        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        // Customer details never reach the log unmasked
        let mut value_json = serde_json::to_value(value)?;
        redaction::redact_json_value(&mut value_json);

        trace!(
            "Outputting data: {}",
            serde_json::to_string(&value_json).unwrap_or_else(|_| "[failed to serialize]".to_string())
        );

        let formatted = self.format.format(value)?;

        match self.format {
            OutputFormat::Yaml => self.write(&formatted),
            _ => self.writeln(&formatted),
        }
    }

    /// Write the error map of a rejected submission
    pub fn field_errors(&mut self, errors: &FieldErrors) -> Result<()> {
        let formatted = self.format.format_field_errors(errors)?;
        if self.is_human() && self.use_color {
            self.writeln(&formatted.trim_end().red().to_string())
        } else {
            self.writeln(formatted.trim_end())
        }
    }

    /// Write an accepted submission
    pub fn accepted(&mut self, submission: &AcceptedSubmission) -> Result<()> {
        let formatted = self.format.format_accepted(submission)?;
        self.writeln(formatted.trim_end())
    }

    /// Write one line of form state, as shown after each replayed event
    pub fn form_state(&mut self, state: &FormState) -> Result<()> {
        if !self.is_human() {
            return self.data(state);
        }

        self.writeln(&format!("  phase: {}", state.phase()))?;
        for (field, value) in state.fields.iter() {
            self.writeln(&format!("  {} = {:?}", field, value))?;
        }
        for (field, message) in state.errors.iter() {
            self.writeln(&format!("  ! {}: {}", field, message))?;
        }
        Ok(())
    }

    /// Write the service catalog as a table
    pub fn services(&mut self, services: &[ServiceOption]) -> Result<()> {
        let rows = services
            .iter()
            .map(|s| vec![s.id.to_string(), s.label.to_string(), s.price.to_string()])
            .collect();
        self.table(&["ID", "SERVICE", "PRICE"], rows)
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        // Calculate column widths
        let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(header_row.trim_end().bold().to_string().as_str())?;
        } else {
            self.writeln(header_row.trim_end())?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i < widths.len() {
                        format!("{:width$}", cell, width = widths[i])
                    } else {
                        cell.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }
}

/// Format a rejected submission's errors for human reading
fn format_field_errors_human(errors: &FieldErrors) -> String {
    if errors.is_empty() {
        return "✓ Quote request is valid\n".to_string();
    }

    let mut output = format!("✗ Quote request has {} invalid field(s)\n", errors.len());
    for (field, message) in errors.iter() {
        output.push_str(&format!("  • {}: {}\n", field, message));
    }
    output
}

/// Format an accepted submission for human reading
fn format_accepted_human(submission: &AcceptedSubmission) -> String {
    let mut output = String::new();

    output.push_str(&format!("✓ {}\n\n", submission.confirmation_message()));
    output.push_str("Request Details:\n");
    for (field, value) in submission.fields.iter() {
        output.push_str(&format!("  {}: {}\n", field, value));
    }
    if let Some(service) = submission.service_option() {
        output.push_str(&format!("  Service: {} ({})\n", service.label, service.price));
    }
    output.push_str(&format!("  Accepted At: {}\n", submission.accepted_at.to_rfc3339()));

    output
}
