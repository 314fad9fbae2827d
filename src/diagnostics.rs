//! Reports for placeholders left without a binding

use std::fmt;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::placeholder::Placeholder;

/// Part of a message a placeholder was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Message,
    /// Mitigation by position, starting at 0
    Mitigation(usize),
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Message => write!(f, "message"),
            Section::Mitigation(index) => write!(f, "mitigation {}", index + 1),
        }
    }
}

/// A placeholder that renders as `UNKNOWN PLACEHOLDER(..)`
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedPlaceholder {
    pub section: Section,
    pub placeholder: Placeholder,
    /// Text of the section, which the placeholder span points into
    pub source: String,
}

impl UnresolvedPlaceholder {
    /// One-line description
    pub fn message(&self) -> String {
        if self.placeholder.is_anonymous() {
            format!("anonymous placeholder in {} has no argument", self.section)
        } else {
            format!(
                "placeholder '{}' in {} has no parameter",
                self.placeholder.reference, self.section
            )
        }
    }

    /// Format the report with source context using ariadne
    pub fn format(&self, filename: &str) -> std::io::Result<String> {
        // ariadne counts chars, placeholder spans are bytes
        let char_offset = |byte: usize| self.source[..byte].chars().count();
        let span = char_offset(self.placeholder.start())..char_offset(self.placeholder.end());
        let mut buf = Vec::new();
        Report::build(ReportKind::Warning, filename, span.start)
            .with_config(Config::default().with_color(false))
            .with_message(self.message())
            .with_label(
                Label::new((filename, span))
                    .with_message("bind a value to this placeholder")
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(self.source.as_str())), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl fmt::Display for UnresolvedPlaceholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.message(),
            self.placeholder.start(),
            self.placeholder.end()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::find_placeholders;

    fn unresolved(text: &str, section: Section) -> UnresolvedPlaceholder {
        let placeholder = find_placeholders(text)
            .into_iter()
            .next()
            .expect("text should contain a placeholder");
        UnresolvedPlaceholder {
            section,
            placeholder,
            source: text.to_string(),
        }
    }

    #[test]
    fn test_message_names_placeholder_and_section() {
        let u = unresolved("Ask {{who}}.", Section::Mitigation(1));
        assert_eq!(u.message(), "placeholder 'who' in mitigation 2 has no parameter");
        assert_eq!(u.to_string(), "placeholder 'who' in mitigation 2 has no parameter at 4..11");
    }

    #[test]
    fn test_anonymous_message() {
        let u = unresolved("x {{}}", Section::Message);
        assert_eq!(u.message(), "anonymous placeholder in message has no argument");
    }

    #[test]
    fn test_format_contains_source_and_label() {
        let u = unresolved("Value {{v}} missing", Section::Message);
        let report = u.format("E-1").expect("report should format");
        assert!(report.contains("placeholder 'v' in message has no parameter"));
        assert!(report.contains("Value {{v}} missing"));
        assert!(report.contains("bind a value to this placeholder"));
    }
}
