//! Value model shared by rules, binding, and instances.
//!
//! Field values are dynamically typed JSON documents. Rules never mutate
//! the candidate value; they only classify it.

use serde_json::Value;
use std::fmt;

/// Checkable value kinds.
///
/// `Number` accepts either an integer or a float. `Float` also accepts
/// integers (they widen losslessly); `Int` never accepts a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point (integers widen)
    Float,
    /// Boolean
    Bool,
    /// Any numeric value, integer or float
    Number,
}

impl ValueKind {
    /// Returns the kind name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
        }
    }

    /// Returns whether the candidate value is of this kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
            ValueKind::Int => value.is_i64() || value.is_u64(),
            ValueKind::Float => value.is_number(),
            ValueKind::Bool => value.is_boolean(),
            ValueKind::Number => value.is_number(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the kind name of a value for error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns the length of a value, if it has one.
///
/// Strings measure in characters, arrays in elements.
pub fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(a) => Some(a.len()),
        _ => None,
    }
}
