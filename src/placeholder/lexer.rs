//! Lexer splitting message text into placeholder markers and literal runs using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// `{{...}}` with an interior free of `}`
    #[regex(r"\{\{[^}]*\}\}")]
    Marker,

    /// A brace that does not open a complete marker
    #[token("{")]
    Brace,

    #[regex(r"[^{]+")]
    Literal,
}

/// Lex text into segments with spans
///
/// Input logos cannot classify is reported as [`Segment::Literal`], so an
/// unterminated marker always passes through as plain text.
pub fn lex(input: &str) -> impl Iterator<Item = (Segment, Span)> + '_ {
    Segment::lexer(input)
        .spanned()
        .map(|(segment, span)| (segment.unwrap_or(Segment::Literal), span))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(input: &str) -> Vec<(Segment, &str)> {
        lex(input).map(|(s, span)| (s, &input[span])).collect()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            segments("no markers here"),
            vec![(Segment::Literal, "no markers here")]
        );
    }

    #[test]
    fn test_marker_between_text() {
        assert_eq!(
            segments("a {{b}} c"),
            vec![
                (Segment::Literal, "a "),
                (Segment::Marker, "{{b}}"),
                (Segment::Literal, " c"),
            ]
        );
    }

    #[test]
    fn test_adjacent_markers() {
        assert_eq!(
            segments("{{a}}{{b}}"),
            vec![(Segment::Marker, "{{a}}"), (Segment::Marker, "{{b}}")]
        );
    }

    #[test]
    fn test_empty_marker() {
        assert_eq!(segments("{{}}"), vec![(Segment::Marker, "{{}}")]);
    }

    #[test]
    fn test_single_braces_are_not_markers() {
        let kinds: Vec<_> = segments("{a} and {b").into_iter().map(|(s, _)| s).collect();
        assert!(!kinds.contains(&Segment::Marker));
    }

    #[test]
    fn test_unicode_literal() {
        assert_eq!(
            segments("größe {{x}}"),
            vec![(Segment::Literal, "größe "), (Segment::Marker, "{{x}}")]
        );
    }
}
