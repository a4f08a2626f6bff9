//! Construction-time errors.

use thiserror::Error;

use crate::validate::ValidationError;

/// Result type for instance construction
pub type ConstructResult<T> = Result<T, ConstructError>;

/// Errors raised while binding arguments and constructing an instance.
///
/// Construction is all-or-nothing: any of these aborts the call and no
/// partial state is observable afterwards.
#[derive(Debug, Error)]
pub enum ConstructError {
    /// More positional arguments than declared fields
    #[error("too many positional arguments: expected at most {expected}, got {given}")]
    TooManyArguments {
        /// Declared field count
        expected: usize,
        /// Positional arguments supplied
        given: usize,
    },

    /// Keyword argument names no declared field
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Field bound both positionally and by keyword, or by two keywords
    #[error("field '{0}' bound more than once")]
    BoundTwice(String),

    /// Declared field left without a value
    #[error("missing value for field '{0}'")]
    MissingField(String),

    /// A bound value violated its field's rule chain
    #[error("field '{field}': {source}")]
    Validation {
        /// The failing field
        field: String,
        /// The violated rule
        source: ValidationError,
    },
}

impl ConstructError {
    /// Returns the field name the error concerns, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConstructError::TooManyArguments { .. } => None,
            ConstructError::UnknownField(name)
            | ConstructError::BoundTwice(name)
            | ConstructError::MissingField(name) => Some(name),
            ConstructError::Validation { field, .. } => Some(field),
        }
    }
}
