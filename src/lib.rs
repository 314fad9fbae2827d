//! Coded Errors - consistent, code-prefixed error messages
//!
//! This library builds messages of the form `<CODE>: <message> <mitigations>`
//! from text containing `{{name}}` placeholders and the values bound to them.
//!
//! # Example
//!
//! ```rust
//! use coded_errors::{args, message_builder};
//!
//! let message = message_builder("E-CFG-7")
//!     .message_with("Could not read {{path}}.", args![std::path::Path::new("/etc/app.toml")])
//!     .mitigation("Check that the file exists.")
//!     .mitigation("Check permissions of {{dir|uq}}.")
//!     .parameter("dir", "/etc")
//!     .render();
//!
//! assert_eq!(
//!     message,
//!     "E-CFG-7: Could not read '/etc/app.toml'. Known mitigations:\n\
//!      * Check that the file exists.\n\
//!      * Check permissions of /etc."
//! );
//! ```

pub mod binder;
pub mod builder;
pub mod diagnostics;
pub mod parameters;
pub mod placeholder;
pub mod quote;
pub mod resolve;
pub mod settings;
pub mod value;

pub use binder::Arguments;
pub use builder::ErrorMessageBuilder;
pub use diagnostics::{Section, UnresolvedPlaceholder};
pub use parameters::{ParameterDefinition, ParameterList};
pub use placeholder::{find_placeholders, Placeholder};
pub use quote::{quote, Quoting, NULL_MARKER};
pub use settings::{Settings, SettingsError};
pub use value::Value;

/// Start building the message for an error code
///
/// This is the main entry point for the library.
///
/// # Example
///
/// ```rust
/// use coded_errors::message_builder;
///
/// let message = message_builder("E-1")
///     .message("Value: {{v}}")
///     .parameter("v", 1)
///     .render();
/// assert_eq!(message, "E-1: Value: 1");
/// ```
pub fn message_builder(code: impl Into<String>) -> ErrorMessageBuilder {
    ErrorMessageBuilder::new(code)
}

/// Start building a message with custom settings
pub fn message_builder_with_settings(
    code: impl Into<String>,
    settings: Settings,
) -> ErrorMessageBuilder {
    ErrorMessageBuilder::new(code).with_settings(settings)
}
