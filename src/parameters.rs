//! Parameter table
//!
//! Bindings are kept in registration order and names may repeat. Lookups
//! return the first binding registered under a name.

use std::borrow::Cow;

use crate::quote::Quoting;
use crate::value::Value;

/// A value bound to a placeholder name
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    pub name: String,
    pub value: Value,
    /// Mode recorded when the binding was made
    pub quoting: Quoting,
    /// Documentation only, never rendered
    pub description: Option<String>,
}

impl ParameterDefinition {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            quoting: Quoting::Automatic,
            description: None,
        }
    }

    /// The binding handed out for names nothing was registered under
    pub fn undefined(name: impl Into<String>) -> Self {
        Self::new(name, Value::Null)
    }

    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn has_value(&self) -> bool {
        !self.value.is_null()
    }
}

/// Append-only list of parameter bindings
#[derive(Debug, Clone, Default)]
pub struct ParameterList {
    definitions: Vec<ParameterDefinition>,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding; duplicates are kept
    pub fn add(&mut self, definition: ParameterDefinition) {
        self.definitions.push(definition);
    }

    /// First binding registered under `name`
    pub fn find(&self, name: &str) -> Option<&ParameterDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// First binding registered under `name`, or an undefined binding named
    /// after the query
    pub fn get(&self, name: &str) -> Cow<'_, ParameterDefinition> {
        match self.find(name) {
            Some(definition) => Cow::Borrowed(definition),
            None => Cow::Owned(ParameterDefinition::undefined(name)),
        }
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.definitions.iter()
    }
}
