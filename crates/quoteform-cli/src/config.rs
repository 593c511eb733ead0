//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - Command-line arguments (applied by the caller)

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, json-pretty, yaml)
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no -v flag is given (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json); unset keeps the format chosen by -v
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: None,
        }
    }
}

/// Serialization format, picked from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Toml,
    Yaml,
    Json,
}

impl FileKind {
    fn of(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Ok(FileKind::Toml),
            Some("yaml") | Some("yml") => Ok(FileKind::Yaml),
            Some("json") => Ok(FileKind::Json),
            _ => Err(Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "a .toml, .yaml or .json config file".to_string(),
            }),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config = match FileKind::of(path)? {
            FileKind::Toml => toml::from_str(&content)?,
            FileKind::Yaml => serde_yaml::from_str(&content)?,
            FileKind::Json => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from the first default location that exists.
    ///
    /// Unreadable files are skipped and reported in the returned warnings;
    /// logging is not set up yet when this runs.
    pub fn load() -> (Self, Vec<String>) {
        Self::load_from_paths(&Self::default_config_paths())
    }

    /// Load the first readable file among `paths`, falling back to defaults
    pub fn load_from_paths(paths: &[PathBuf]) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::from_file(path) {
                Ok(config) => return (config, warnings),
                Err(e) => warnings.push(format!("Ignoring config file {}: {}", path.display(), e)),
            }
        }

        (Self::default(), warnings)
    }

    /// Load configuration from a specific file or default locations.
    ///
    /// An explicit file must load; default locations only produce warnings.
    pub fn load_with_file(file: Option<&Path>) -> Result<(Self, Vec<String>)> {
        match file {
            Some(path) => Ok((Self::from_file(path)?, Vec::new())),
            None => Ok(Self::load()),
        }
    }

    /// Path of the per-user config file
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quoteform").join("config.toml"))
    }

    /// Get default configuration file paths to check, in priority order
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".quoteform.toml"),
            PathBuf::from(".quoteform.yaml"),
            PathBuf::from(".quoteform.json"),
        ];

        if let Some(user_path) = Self::user_config_path() {
            paths.push(user_path);
        }

        paths
    }

    /// Configured default output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output
            .format
            .parse()
            .map_err(|_| Error::config(format!("unknown output format '{}'", self.output.format)))
    }

    /// Render this configuration in the given format
    pub fn render(&self, format: crate::cli::ConfigFormat) -> Result<String> {
        use crate::cli::ConfigFormat;

        Ok(match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
        })
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match FileKind::of(path)? {
            FileKind::Toml => toml::to_string_pretty(self)?,
            FileKind::Yaml => serde_yaml::to_string(self)?,
            FileKind::Json => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
