//! Positional argument binding
//!
//! Arguments passed with a text fragment are bound to the fragment's
//! placeholders in order of occurrence, one argument per placeholder.

use crate::parameters::{ParameterDefinition, ParameterList};
use crate::placeholder::find_placeholders;
use crate::value::Value;

/// Positional arguments supplied with a text fragment
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Arguments {
    /// A single absent argument in place of a list; binds only the first
    /// placeholder, to [`Value::Null`]
    Null,
    List(Vec<Value>),
    #[default]
    Empty,
}

impl Arguments {
    fn values(&self) -> &[Value] {
        static NULL: Value = Value::Null;
        match self {
            Arguments::Null => std::slice::from_ref(&NULL),
            Arguments::List(values) => values,
            Arguments::Empty => &[],
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Arguments {
    fn from(values: Vec<T>) -> Self {
        Arguments::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Arguments {
    fn from(values: [T; N]) -> Self {
        Arguments::List(values.into_iter().map(Into::into).collect())
    }
}

/// Build an [`Arguments`] list from values of mixed types
///
/// ```rust
/// use coded_errors::{args, Arguments, Value};
///
/// let arguments = args!["a", 1, 2.5];
/// assert_eq!(
///     arguments,
///     Arguments::List(vec![Value::from("a"), Value::from(1), Value::from(2.5)])
/// );
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        $crate::Arguments::List(vec![$($crate::Value::from($value)),*])
    };
}

/// Bind `arguments` to the placeholders of `text`, appending one binding per
/// matched placeholder to `parameters`
///
/// Placeholders past the last argument stay unbound; surplus arguments are
/// ignored. Each binding records the placeholder's quoting mode.
pub fn bind_arguments(
    text: &str,
    arguments: &Arguments,
    parameters: &mut ParameterList,
    trace: bool,
) {
    let values = arguments.values();
    for (placeholder, value) in find_placeholders(text).into_iter().zip(values) {
        if trace {
            eprintln!(
                "TRACE: bind '{}' {:?} = {:?}",
                placeholder.reference, placeholder.quoting, value
            );
        }
        parameters.add(
            ParameterDefinition::new(placeholder.reference, value.clone())
                .with_quoting(placeholder.quoting),
        );
    }
}
