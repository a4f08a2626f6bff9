//! Field access errors.

use thiserror::Error;

use crate::validate::ValidationError;

/// Result type for field access
pub type AccessResult<T> = Result<T, AccessError>;

/// Errors raised on field get/set/unset.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Named field is not declared on the record type
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Fields cannot be deleted
    #[error("field '{0}' cannot be deleted")]
    ImmutableField(String),

    /// Assigned value violated the field's rule chain
    #[error("field '{field}': {source}")]
    Validation {
        /// The failing field
        field: String,
        /// The violated rule
        source: ValidationError,
    },
}
