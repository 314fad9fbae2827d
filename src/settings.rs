//! Settings for message building, loadable from TOML
//!
//! ```toml
//! ticket_mitigation = "Please report this to the maintainers."
//! trace = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Mitigation used by [`ErrorMessageBuilder::ticket_mitigation`](crate::ErrorMessageBuilder::ticket_mitigation)
pub const DEFAULT_TICKET_MITIGATION: &str =
    "This is an internal error that should not happen. Please report it by opening a GitHub issue.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Text of the ticket mitigation
    pub ticket_mitigation: String,

    /// Print binding and resolution steps to stderr
    pub trace: bool,
}

/// TOML structure for deserializing settings
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    ticket_mitigation: Option<String>,
    trace: Option<bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ticket_mitigation: DEFAULT_TICKET_MITIGATION.to_string(),
            trace: false,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string; absent keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(Settings {
            ticket_mitigation: parsed.ticket_mitigation.unwrap_or(defaults.ticket_mitigation),
            trace: parsed.trace.unwrap_or(defaults.trace),
        })
    }

    /// Set the ticket mitigation text
    pub fn with_ticket_mitigation(mut self, text: impl Into<String>) -> Self {
        self.ticket_mitigation = text.into();
        self
    }

    /// Enable or disable tracing to stderr
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
