//! Rule violation errors.
//!
//! Every variant names exactly one violated rule; the owning field name is
//! attached by the caller that runs the chain.

use thiserror::Error;

/// Result type for rule checks
pub type ValidationResult = Result<(), ValidationError>;

/// A single rule violation.
///
/// All violations are synchronous, non-retryable, and definitionally a
/// caller bug (bad input data). They propagate unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value is not of the expected kind
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        /// Expected kind name
        expected: &'static str,
        /// Actual kind name
        actual: &'static str,
    },

    /// Value is not greater than zero
    #[error("expected a positive value, got {actual}")]
    NotPositive {
        /// The rejected value
        actual: String,
    },

    /// Value exceeds the maximum length
    #[error("length {len} exceeds maximum length {maxlen}")]
    TooLong {
        /// Measured length
        len: usize,
        /// Allowed maximum
        maxlen: usize,
    },

    /// Value does not match the pattern from its start
    #[error("'{actual}' does not match pattern '{pattern}'")]
    PatternMismatch {
        /// The declared pattern
        pattern: String,
        /// The rejected value
        actual: String,
    },
}

impl ValidationError {
    /// Returns the name of the violated rule.
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::TypeMismatch { .. } => "type_check",
            ValidationError::NotPositive { .. } => "positive_check",
            ValidationError::TooLong { .. } => "max_length_check",
            ValidationError::PatternMismatch { .. } => "pattern_check",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names() {
        let err = ValidationError::TypeMismatch {
            expected: "string",
            actual: "int",
        };
        assert_eq!(err.rule(), "type_check");

        let err = ValidationError::NotPositive {
            actual: "-3".into(),
        };
        assert_eq!(err.rule(), "positive_check");

        let err = ValidationError::TooLong { len: 11, maxlen: 10 };
        assert_eq!(err.rule(), "max_length_check");

        let err = ValidationError::PatternMismatch {
            pattern: "[A-Z]+$".into(),
            actual: "msft".into(),
        };
        assert_eq!(err.rule(), "pattern_check");
    }

    #[test]
    fn test_display_carries_diagnostics() {
        let err = ValidationError::TooLong { len: 11, maxlen: 10 };
        let display = format!("{}", err);
        assert!(display.contains("11"));
        assert!(display.contains("10"));
    }
}
