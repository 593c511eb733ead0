//! Accepted submission snapshot
//!
//! Copyright (c) 2025 Quoteform Team
//! Licensed under the Apache-2.0 license

use crate::catalog::{find_service, ServiceOption};
use crate::fields::{FieldName, FieldValues};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Field values captured at the moment a submission passed every check,
/// ready to hand to whatever delivers quote requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedSubmission {
    /// Snapshot of the form at submit time
    pub fields: FieldValues,
    /// When the submission was accepted
    pub accepted_at: DateTime<Utc>,
}

impl AcceptedSubmission {
    /// Snapshot values, stamped with the current time
    pub fn new(fields: FieldValues) -> Self {
        Self {
            fields,
            accepted_at: Utc::now(),
        }
    }

    /// Customer name as entered, without surrounding whitespace
    pub fn customer_name(&self) -> &str {
        self.fields.get(FieldName::Name).trim()
    }

    /// Catalog entry for the chosen service, when the id is one we list
    pub fn service_option(&self) -> Option<&'static ServiceOption> {
        find_service(self.fields.get(FieldName::Service))
    }

    /// Thank-you text shown once the request is in
    pub fn confirmation_message(&self) -> String {
        format!(
            "Thank you {}! We'll get back to you within minutes with your quote.",
            self.customer_name()
        )
    }
}
