//! Placeholder scanning
//!
//! A placeholder is a `{{reference}}` or `{{reference|directive}}` marker in
//! message or mitigation text. The directive after the last `|` selects the
//! quoting mode (see [`Quoting::from_directive`]).

pub mod lexer;

use crate::quote::Quoting;

pub use lexer::Span;
use lexer::{lex, Segment};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const SEPARATOR: char = '|';

/// A placeholder found in a text fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Logical name, empty for anonymous placeholders
    pub reference: String,
    pub quoting: Quoting,
    /// Byte span of the whole marker, delimiters included
    pub span: Span,
}

impl Placeholder {
    /// Parse the interior of a marker (the text between `{{` and `}}`)
    pub fn parse(interior: &str, span: Span) -> Self {
        let (reference, quoting) = match interior.rsplit_once(SEPARATOR) {
            Some((reference, directive)) => (reference, Quoting::from_directive(directive)),
            None => (interior, Quoting::Automatic),
        };
        Self {
            reference: reference.to_string(),
            quoting,
            span,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn is_anonymous(&self) -> bool {
        self.reference.is_empty()
    }
}

/// Find the placeholders in `text`
///
/// The returned scan is cheap to copy; every call to `into_iter` starts a
/// fresh left-to-right pass.
pub fn find_placeholders(text: &str) -> PlaceholderScan<'_> {
    PlaceholderScan { text }
}

/// Restartable sequence of the placeholders in a text fragment
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderScan<'a> {
    text: &'a str,
}

impl<'a> IntoIterator for PlaceholderScan<'a> {
    type Item = Placeholder;
    type IntoIter = Box<dyn Iterator<Item = Placeholder> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        let text = self.text;
        Box::new(lex(text).filter_map(move |(segment, span)| match segment {
            Segment::Marker => {
                let interior = &text[span.start + OPEN.len()..span.end - CLOSE.len()];
                Some(Placeholder::parse(interior, span))
            }
            Segment::Brace | Segment::Literal => None,
        }))
    }
}
