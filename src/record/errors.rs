//! Declaration-time errors.
//!
//! A record type that fails to build is unusable; none of these errors can
//! surface later at construction or assignment time.

use thiserror::Error;

/// Result type for record declaration
pub type DeclarationResult<T> = Result<T, DeclarationError>;

/// Errors raised while declaring a record type.
#[derive(Debug, Error)]
pub enum DeclarationError {
    /// Two field declarations share a name
    #[error("field '{0}' already declared")]
    DuplicateField(String),

    /// A field was declared with an empty name
    #[error("field at position {position} has an empty name")]
    EmptyFieldName {
        /// Zero-based declaration position
        position: usize,
    },

    /// A declared pattern failed to compile
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as declared
        pattern: String,
        /// Compiler diagnostic
        reason: String,
    },

    /// Two record declarations share a name
    #[error("record '{0}' already registered")]
    DuplicateRecord(String),

    /// A declaration file could not be read or parsed
    #[error("malformed declaration '{path}': {reason}")]
    MalformedDeclaration {
        /// Source file path, or `<in-memory>`
        path: String,
        /// What went wrong
        reason: String,
    },
}
