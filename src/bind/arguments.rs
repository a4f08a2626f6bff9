//! Constructor arguments.

use serde_json::Value;

/// Arguments for constructing a record instance.
///
/// Positional values bind to fields in declaration order; keyword values
/// bind by field name. Both conventions can be mixed in one call, with
/// declaration order as the single source of truth for positions.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    positional: Vec<Value>,
    keyword: Vec<(String, Value)>,
}

impl Arguments {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn positional(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Appends a keyword argument.
    pub fn keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.push((name.into(), value.into()));
        self
    }

    /// Returns the number of positional arguments.
    pub fn positional_count(&self) -> usize {
        self.positional.len()
    }

    /// Returns the number of keyword arguments.
    pub fn keyword_count(&self) -> usize {
        self.keyword.len()
    }

    pub(crate) fn into_parts(self) -> (Vec<Value>, Vec<(String, Value)>) {
        (self.positional, self.keyword)
    }
}
