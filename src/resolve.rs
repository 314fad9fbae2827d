//! Render-time placeholder replacement

use crate::parameters::ParameterList;
use crate::placeholder::{find_placeholders, Placeholder};
use crate::quote::quote;

/// Replace every placeholder in `text` with its bound value
///
/// Text outside placeholders is copied unchanged. Placeholders without a
/// binding become `UNKNOWN PLACEHOLDER('<reference>')`.
pub fn fill_placeholders(text: &str, parameters: &ParameterList, trace: bool) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_end = 0;
    for placeholder in find_placeholders(text) {
        result.push_str(&text[previous_end..placeholder.start()]);
        let filling = filling(&placeholder, parameters);
        if trace {
            eprintln!(
                "TRACE: fill {}..{} '{}' -> {}",
                placeholder.start(),
                placeholder.end(),
                placeholder.reference,
                filling
            );
        }
        result.push_str(&filling);
        previous_end = placeholder.end();
    }
    result.push_str(&text[previous_end..]);
    result
}

fn filling(placeholder: &Placeholder, parameters: &ParameterList) -> String {
    match parameters.find(&placeholder.reference) {
        Some(definition) => quote(&definition.value, definition.quoting.or(placeholder.quoting)),
        None => unknown_placeholder(&placeholder.reference),
    }
}

/// Text rendered for a placeholder nothing is bound to
pub fn unknown_placeholder(reference: &str) -> String {
    format!("UNKNOWN PLACEHOLDER('{}')", reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::ParameterDefinition;
    use crate::quote::Quoting;

    fn parameters(bindings: Vec<ParameterDefinition>) -> ParameterList {
        let mut list = ParameterList::new();
        for binding in bindings {
            list.add(binding);
        }
        list
    }

    #[test]
    fn test_text_without_placeholders_is_identity() {
        let list = ParameterList::new();
        for text in ["", "plain", "{single}", "{{unterminated", "multi\nline ✓"] {
            assert_eq!(fill_placeholders(text, &list, false), text);
        }
    }

    #[test]
    fn test_fills_bound_values() {
        let list = parameters(vec![
            ParameterDefinition::new("a", "X"),
            ParameterDefinition::new("b", 2),
        ]);
        assert_eq!(fill_placeholders("{{a}} and {{b}}.", &list, false), "'X' and 2.");
    }

    #[test]
    fn test_unknown_placeholder() {
        let list = ParameterList::new();
        assert_eq!(
            fill_placeholders("test {{unknown|uq}}", &list, false),
            "test UNKNOWN PLACEHOLDER('unknown')"
        );
        assert_eq!(
            fill_placeholders("test {{}}", &list, false),
            "test UNKNOWN PLACEHOLDER('')"
        );
    }

    #[test]
    fn test_binding_mode_overrides_placeholder_mode() {
        let list = parameters(vec![
            ParameterDefinition::new("v", "x").with_quoting(Quoting::Unquoted)
        ]);
        assert_eq!(fill_placeholders("{{v|d}}", &list, false), "x");
    }

    #[test]
    fn test_placeholder_mode_applies_to_automatic_binding() {
        let list = parameters(vec![ParameterDefinition::new("v", "x")]);
        assert_eq!(fill_placeholders("{{v|uq}} {{v|d}} {{v}}", &list, false), "x \"x\" 'x'");
    }

    #[test]
    fn test_replacement_text_is_literal() {
        let list = parameters(vec![ParameterDefinition::new("p", "$2 {{p}}")]);
        assert_eq!(fill_placeholders("{{p}}", &list, false), "'$2 {{p}}'");
    }

    #[test]
    fn test_null_value() {
        let list = parameters(vec![ParameterDefinition::new("p", None::<i32>)]);
        assert_eq!(fill_placeholders("{{p|q}}", &list, false), "<null>");
    }
}
