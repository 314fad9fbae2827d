//! Value quoting
//!
//! Renders a [`Value`] as text under a [`Quoting`] mode. Quote characters
//! inside the value are not escaped.

use crate::value::Value;

/// Text substituted for absent values
pub const NULL_MARKER: &str = "<null>";

/// How a resolved value is wrapped in quote characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quoting {
    /// Quote text-like values (strings, chars, paths, URLs) in single quotes
    #[default]
    Automatic,
    SingleQuoted,
    DoubleQuoted,
    Unquoted,
}

impl Quoting {
    /// Parse the directive after the `|` separator of a placeholder
    ///
    /// Only `uq`, `u`, `q` and `d` are recognized.
    pub fn from_directive(directive: &str) -> Self {
        match directive {
            "uq" | "u" => Quoting::Unquoted,
            "q" => Quoting::SingleQuoted,
            "d" => Quoting::DoubleQuoted,
            _ => Quoting::Automatic,
        }
    }

    /// This mode, or `fallback` when this mode leaves the decision open
    pub fn or(self, fallback: Quoting) -> Quoting {
        match self {
            Quoting::Automatic => fallback,
            explicit => explicit,
        }
    }
}

/// Render a value as text under the given quoting mode
pub fn quote(value: &Value, quoting: Quoting) -> String {
    let mut out = String::new();
    quote_into(value, quoting, &mut out);
    out
}

fn quote_into(value: &Value, quoting: Quoting, out: &mut String) {
    match value {
        Value::Null => out.push_str(NULL_MARKER),
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                quote_into(item, quoting, out);
            }
            out.push(']');
        }
        scalar => {
            let text = scalar.to_string();
            match quoting {
                Quoting::Unquoted => out.push_str(&text),
                Quoting::SingleQuoted => wrap(&text, '\'', out),
                Quoting::DoubleQuoted => wrap(&text, '"', out),
                Quoting::Automatic if scalar.is_text_like() => wrap(&text, '\'', out),
                Quoting::Automatic => out.push_str(&text),
            }
        }
    }
}

fn wrap(text: &str, quote: char, out: &mut String) {
    out.push(quote);
    out.push_str(text);
    out.push(quote);
}
