//! Error message builder
//!
//! Collects a message, mitigations and parameter bindings for one error code
//! and renders them as `<CODE>: <message> <mitigations>`.

use std::fmt;

use crate::binder::{bind_arguments, Arguments};
use crate::diagnostics::{Section, UnresolvedPlaceholder};
use crate::parameters::{ParameterDefinition, ParameterList};
use crate::placeholder::find_placeholders;
use crate::quote::Quoting;
use crate::resolve::fill_placeholders;
use crate::settings::Settings;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
enum Mitigation {
    Text(String),
    /// Resolved from the settings at render time
    Ticket,
}

/// Builder for a coded error message
///
/// # Example
///
/// ```rust
/// use coded_errors::{args, message_builder};
///
/// let message = message_builder("E-1")
///     .message_with("Unknown column {{column}} in {{table}}.", args!["id", "users"])
///     .mitigation("Check the schema.")
///     .render();
/// assert_eq!(message, "E-1: Unknown column 'id' in 'users'. Check the schema.");
/// ```
#[derive(Debug, Clone)]
pub struct ErrorMessageBuilder {
    code: String,
    message: String,
    mitigations: Vec<Mitigation>,
    parameters: ParameterList,
    settings: Settings,
}

impl ErrorMessageBuilder {
    /// Start a message for the given error code
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: String::new(),
            mitigations: Vec::new(),
            parameters: ParameterList::new(),
            settings: Settings::default(),
        }
    }

    /// Use the given settings
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Append text to the message
    pub fn message(self, text: &str) -> Self {
        self.message_with(text, Arguments::Empty)
    }

    /// Append text to the message, binding `arguments` to its placeholders
    pub fn message_with(mut self, text: &str, arguments: impl Into<Arguments>) -> Self {
        self.message.push_str(text);
        self.bind(text, &arguments.into());
        self
    }

    /// Bind a value to a placeholder name
    pub fn parameter(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_parameter(ParameterDefinition::new(name, value))
    }

    /// Bind a value to a placeholder name, with a description for catalog
    /// tooling; the description is not rendered
    pub fn parameter_described(
        self,
        name: impl Into<String>,
        value: impl Into<Value>,
        description: impl Into<String>,
    ) -> Self {
        self.add_parameter(ParameterDefinition::new(name, value).with_description(description))
    }

    /// Bind a value that is always rendered without quotes
    ///
    /// Prefer the `|uq` placeholder directive.
    pub fn unquoted_parameter(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_parameter(ParameterDefinition::new(name, value).with_quoting(Quoting::Unquoted))
    }

    /// Unquoted variant of [`parameter_described`](Self::parameter_described)
    pub fn unquoted_parameter_described(
        self,
        name: impl Into<String>,
        value: impl Into<Value>,
        description: impl Into<String>,
    ) -> Self {
        self.add_parameter(
            ParameterDefinition::new(name, value)
                .with_quoting(Quoting::Unquoted)
                .with_description(description),
        )
    }

    fn add_parameter(mut self, definition: ParameterDefinition) -> Self {
        self.parameters.add(definition);
        self
    }

    /// Add a mitigation
    pub fn mitigation(self, text: &str) -> Self {
        self.mitigation_with(text, Arguments::Empty)
    }

    /// Add a mitigation, binding `arguments` to its placeholders
    pub fn mitigation_with(mut self, text: &str, arguments: impl Into<Arguments>) -> Self {
        self.mitigations.push(Mitigation::Text(text.to_string()));
        self.bind(text, &arguments.into());
        self
    }

    /// Add the standard "report this" mitigation
    pub fn ticket_mitigation(mut self) -> Self {
        self.mitigations.push(Mitigation::Ticket);
        self
    }

    fn bind(&mut self, text: &str, arguments: &Arguments) {
        bind_arguments(text, arguments, &mut self.parameters, self.settings.trace);
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn parameters(&self) -> &ParameterList {
        &self.parameters
    }

    fn mitigation_text<'a>(&'a self, mitigation: &'a Mitigation) -> &'a str {
        match mitigation {
            Mitigation::Text(text) => text,
            Mitigation::Ticket => &self.settings.ticket_mitigation,
        }
    }

    fn fill(&self, text: &str) -> String {
        fill_placeholders(text, &self.parameters, self.settings.trace)
    }

    /// Render the final message
    pub fn render(&self) -> String {
        let mut result = self.code.clone();
        if !self.message.is_empty() {
            result.push_str(": ");
            result.push_str(&self.fill(&self.message));
        }
        match self.mitigations.as_slice() {
            [] => {}
            [single] => {
                result.push(' ');
                result.push_str(&self.fill(self.mitigation_text(single)));
            }
            many => {
                result.push_str(" Known mitigations:");
                for mitigation in many {
                    result.push_str("\n* ");
                    result.push_str(&self.fill(self.mitigation_text(mitigation)));
                }
            }
        }
        result
    }

    /// Placeholders in the message and mitigations that nothing is bound to
    pub fn unresolved_placeholders(&self) -> Vec<UnresolvedPlaceholder> {
        let sections = std::iter::once((Section::Message, self.message.as_str())).chain(
            self.mitigations
                .iter()
                .enumerate()
                .map(|(i, m)| (Section::Mitigation(i), self.mitigation_text(m))),
        );

        let mut unresolved = Vec::new();
        for (section, text) in sections {
            for placeholder in find_placeholders(text) {
                if !self.parameters.contains_key(&placeholder.reference) {
                    unresolved.push(UnresolvedPlaceholder {
                        section,
                        placeholder,
                        source: text.to_string(),
                    });
                }
            }
        }
        unresolved
    }
}

impl fmt::Display for ErrorMessageBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
