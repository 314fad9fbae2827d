//! Values that can be substituted into placeholders
//!
//! [`Value`] is a closed set of the kinds the quoter distinguishes. Anything
//! else is carried as [`Value::Other`] with its text representation.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::quote::NULL_MARKER;

/// A placeholder argument
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value, rendered as `<null>` under every quoting mode
    Null,
    Text(String),
    Char(char),
    Integer(i128),
    Float(f64),
    Bool(bool),
    /// Filesystem path or file
    Path(PathBuf),
    /// URL or URI
    Url(String),
    /// Ordered collection, quoted element by element
    List(Vec<Value>),
    /// Opaque value represented by its text
    Other(String),
}

impl Value {
    /// Create a URL/URI value
    pub fn url(url: impl Into<String>) -> Self {
        Value::Url(url.into())
    }

    /// Wrap any displayable value as an opaque value
    pub fn display(value: impl fmt::Display) -> Self {
        Value::Other(value.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether automatic quoting wraps this value in single quotes
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            Value::Text(_) | Value::Char(_) | Value::Path(_) | Value::Url(_)
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str(NULL_MARKER),
            Value::Text(s) | Value::Url(s) | Value::Other(s) => f.write_str(s),
            Value::Char(c) => write!(f, "{}", c),
            Value::Integer(n) => write!(f, "{}", n),
            // Debug keeps the decimal point on whole numbers ("1.0")
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Path(p) => write!(f, "{}", p.display()),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(n as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        // Go through the shortest f32 text so 0.1f32 stays "0.1"
        Value::Float(x.to_string().parse().unwrap_or(f64::from(x)))
    }
}

impl From<&Path> for Value {
    fn from(p: &Path) -> Self {
        Value::Path(p.to_path_buf())
    }
}

impl From<PathBuf> for Value {
    fn from(p: PathBuf) -> Self {
        Value::Path(p)
    }
}

impl From<&PathBuf> for Value {
    fn from(p: &PathBuf) -> Self {
        Value::Path(p.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::List(items.iter().cloned().map(Into::into).collect())
    }
}
