//! Form state and lifecycle phase

use crate::fields::{FieldErrors, FieldValues};
use serde::Serialize;

/// Where the form is in its lifecycle.
///
/// `Editing` is both the initial state and the one every edit returns to.
/// `Submitted` lasts only until the next edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Editing,
    Submitted,
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormPhase::Editing => f.write_str("editing"),
            FormPhase::Submitted => f.write_str("submitted"),
        }
    }
}

/// The single mutable entity behind one quote form view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub fields: FieldValues,
    pub errors: FieldErrors,
    /// Set only by a fully valid submission
    pub submitted: bool,
}

impl FormState {
    /// Fresh, empty form
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitted {
            FormPhase::Submitted
        } else {
            FormPhase::Editing
        }
    }
}
