//! Hand-off point for accepted submissions
//!
//! The engine never delivers quote requests itself. Embedders implement
//! [`SubmissionSink`] for whatever picks them up (a mailer, a CRM, a
//! confirmation banner) and pass it to [`crate::QuoteForm::submit_to`].
//!
//! Copyright (c) 2025 Quoteform Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::form::AcceptedSubmission;

/// Receiver of accepted submissions
pub trait SubmissionSink {
    /// Short name used in logs and delivery errors
    fn name(&self) -> &str;

    /// Take ownership of one accepted submission.
    ///
    /// Returning an error keeps the form's values so the user can retry.
    fn deliver(&mut self, submission: &AcceptedSubmission) -> Result<()>;
}

/// Sink that keeps every submission in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    submissions: Vec<AcceptedSubmission>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submissions delivered so far, oldest first
    pub fn submissions(&self) -> &[AcceptedSubmission] {
        &self.submissions
    }

    /// Take every collected submission, leaving the sink empty
    pub fn drain(&mut self) -> Vec<AcceptedSubmission> {
        std::mem::take(&mut self.submissions)
    }
}

impl SubmissionSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn deliver(&mut self, submission: &AcceptedSubmission) -> Result<()> {
        self.submissions.push(submission.clone());
        Ok(())
    }
}
