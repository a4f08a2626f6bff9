//! Single-constraint rules.

use regex::Regex;
use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};
use crate::value::{kind_name, length_of, ValueKind};

/// A single named constraint on a candidate field value.
///
/// Rules are stateless apart from their own parameters and never mutate
/// the candidate.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Candidate must be of the given kind
    TypeCheck(ValueKind),
    /// Candidate must be a number greater than zero
    PositiveCheck,
    /// Candidate length must not exceed the maximum
    MaxLengthCheck(usize),
    /// Candidate must match the pattern from its start
    PatternCheck {
        /// Compiled start-anchored regex
        regex: Regex,
        /// The pattern as declared, for error messages
        pattern: String,
    },
}

impl Rule {
    /// Compiles a pattern check.
    ///
    /// The match is anchored at the start of the candidate, so `[A-Z]+$`
    /// accepts `"MSFT"` and rejects `"xMSFT"`.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(Rule::PatternCheck {
            regex,
            pattern: pattern.to_string(),
        })
    }

    /// Returns the rule name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::TypeCheck(_) => "type_check",
            Rule::PositiveCheck => "positive_check",
            Rule::MaxLengthCheck(_) => "max_length_check",
            Rule::PatternCheck { .. } => "pattern_check",
        }
    }

    /// Checks a candidate value against this rule.
    pub fn check(&self, value: &Value) -> ValidationResult {
        match self {
            Rule::TypeCheck(kind) => {
                if kind.matches(value) {
                    Ok(())
                } else {
                    Err(ValidationError::TypeMismatch {
                        expected: kind.name(),
                        actual: kind_name(value),
                    })
                }
            }
            Rule::PositiveCheck => check_positive(value),
            Rule::MaxLengthCheck(maxlen) => match length_of(value) {
                Some(len) if len > *maxlen => Err(ValidationError::TooLong {
                    len,
                    maxlen: *maxlen,
                }),
                Some(_) => Ok(()),
                // A value with no length cannot satisfy a length bound
                None => Err(ValidationError::TypeMismatch {
                    expected: "string or array",
                    actual: kind_name(value),
                }),
            },
            Rule::PatternCheck { regex, pattern } => match value.as_str() {
                Some(s) if regex.is_match(s) => Ok(()),
                Some(s) => Err(ValidationError::PatternMismatch {
                    pattern: pattern.clone(),
                    actual: s.to_string(),
                }),
                None => Err(ValidationError::TypeMismatch {
                    expected: "string",
                    actual: kind_name(value),
                }),
            },
        }
    }
}

/// Checks that a numeric value is strictly greater than zero.
///
/// A non-numeric candidate is not positive either; it fails the same way.
fn check_positive(value: &Value) -> ValidationResult {
    let positive = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i > 0
            } else if n.as_u64().is_some() {
                // u64 only appears for values beyond i64::MAX
                true
            } else {
                n.as_f64().map_or(false, |f| f > 0.0)
            }
        }
        _ => false,
    };

    if positive {
        Ok(())
    } else {
        Err(ValidationError::NotPositive {
            actual: render(value),
        })
    }
}

/// Renders a rejected value for error messages.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_check_passes_and_fails() {
        let rule = Rule::TypeCheck(ValueKind::String);
        assert!(rule.check(&json!("hello")).is_ok());

        let err = rule.check(&json!(5)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                expected: "string",
                actual: "int",
            }
        );
    }

    #[test]
    fn test_positive_check_boundaries() {
        let rule = Rule::PositiveCheck;
        assert!(rule.check(&json!(1)).is_ok());
        assert!(rule.check(&json!(0.5)).is_ok());
        assert!(rule.check(&json!(0)).is_err());
        assert!(rule.check(&json!(-1)).is_err());
        assert!(rule.check(&json!(-0.5)).is_err());
    }

    #[test]
    fn test_positive_check_rejects_non_numbers() {
        let rule = Rule::PositiveCheck;
        let err = rule.check(&json!("five")).unwrap_err();
        assert_eq!(err.rule(), "positive_check");
    }

    #[test]
    fn test_max_length_boundary() {
        let rule = Rule::MaxLengthCheck(10);
        assert!(rule.check(&json!("exactly10!")).is_ok());
        let err = rule.check(&json!("exactly11!!")).unwrap_err();
        assert_eq!(err, ValidationError::TooLong { len: 11, maxlen: 10 });
    }

    #[test]
    fn test_max_length_counts_characters_not_bytes() {
        let rule = Rule::MaxLengthCheck(5);
        assert!(rule.check(&json!("héllo")).is_ok());
    }

    #[test]
    fn test_max_length_on_arrays() {
        let rule = Rule::MaxLengthCheck(2);
        assert!(rule.check(&json!([1, 2])).is_ok());
        assert!(rule.check(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_max_length_on_unsized_value() {
        let rule = Rule::MaxLengthCheck(10);
        let err = rule.check(&json!(42)).unwrap_err();
        assert_eq!(err.rule(), "type_check");
    }

    #[test]
    fn test_pattern_matches_from_start() {
        let rule = Rule::pattern("[A-Z]+$").unwrap();
        assert!(rule.check(&json!("MSFT")).is_ok());
        assert!(rule.check(&json!("msft")).is_err());
        assert!(rule.check(&json!("xMSFT")).is_err());
    }

    #[test]
    fn test_pattern_unanchored_end() {
        // re.match semantics: anchored at the start only
        let rule = Rule::pattern("[A-Z]+").unwrap();
        assert!(rule.check(&json!("MSFT2024")).is_ok());
        assert!(rule.check(&json!("2024MSFT")).is_err());
    }

    #[test]
    fn test_pattern_error_carries_declared_pattern() {
        let rule = Rule::pattern("[A-Z]+$").unwrap();
        let err = rule.check(&json!("msft")).unwrap_err();
        match err {
            ValidationError::PatternMismatch { pattern, actual } => {
                assert_eq!(pattern, "[A-Z]+$");
                assert_eq!(actual, "msft");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_pattern_fails_at_compile_time() {
        assert!(Rule::pattern("[unclosed").is_err());
    }
}
