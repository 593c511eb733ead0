//! Command handlers for CLI subcommands
//!
//! Each subcommand lives in its own module; the loaders shared by the
//! file-based commands live here.

mod check;
mod completions;
mod config;
mod replay;
mod services;
mod validate;

pub use check::handle_check;
pub use completions::handle_completions;
pub use config::handle_config;
pub use replay::handle_replay;
pub use services::handle_services;
pub use validate::{handle_submit, handle_validate};

use crate::error::{Error, Result};
use quoteform_core::{FieldValues, FormEvent};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a JSON or YAML document into an untyped value.
///
/// `.yaml` and `.yml` files are parsed as YAML, anything else as JSON.
pub fn load_document(path: &Path) -> Result<serde_json::Value> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "Read input file");

    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        })
    }
}

/// Load a quote request: one object of field values keyed by field name
pub fn load_request(path: &Path) -> Result<FieldValues> {
    let document = load_document(path)?;
    Ok(FieldValues::from_json_value(&document)?)
}

/// Load a list of form events to replay
pub fn load_events(path: &Path) -> Result<Vec<FormEvent>> {
    let document = load_document(path)?;
    if !document.is_array() {
        return Err(Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "a list of form events".to_string(),
        });
    }
    Ok(serde_json::from_value(document)?)
}
