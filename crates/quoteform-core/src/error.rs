//! Error types for the quote form engine
//!
//! Field validation failures are not errors in this sense: they are data
//! (see [`crate::validation::ValidationFailure`]) that the caller renders and
//! lets the user correct. The variants here cover malformed input handed to
//! the engine and failures of the external delivery collaborator.
//!
//! Copyright (c) 2025 Quoteform Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Main error type for quote form operations
#[derive(Error, Debug)]
pub enum Error {
    /// A field name that is not part of the quote request form
    #[error("Unknown form field: '{name}'")]
    UnknownField { name: String },

    /// A field value that is not text
    #[error("Invalid value for field '{field}': expected a string, found {found}")]
    InvalidFieldValue { field: String, found: String },

    /// A quote request document that is not a JSON object
    #[error("Invalid quote request: {message}")]
    InvalidRequest { message: String },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The submission sink refused an accepted submission
    #[error("Delivery failed ({sink}): {message}")]
    Delivery { sink: String, message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a delivery error for the named sink
    pub fn delivery(sink: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Delivery {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Whether the user can fix this error by editing the form
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::UnknownField { .. } | Self::InvalidFieldValue { .. } | Self::InvalidRequest { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
