//! Ordered rule chains and the named composites built from them.

use serde_json::Value;

use super::errors::ValidationResult;
use super::rule::Rule;
use crate::value::ValueKind;

/// An ordered chain of rules for one field.
///
/// Rules run in order and the first failure short-circuits; later rules are
/// never evaluated. The named constructors fix the composition orders:
/// type check before length bound before pattern match.
#[derive(Debug, Clone, Default)]
pub struct RuleChain {
    rules: Vec<Rule>,
}

impl RuleChain {
    /// Creates a chain from an explicit rule list.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// An empty chain: any value passes.
    pub fn any() -> Self {
        Self::default()
    }

    /// String of any length.
    pub fn string() -> Self {
        Self::new(vec![Rule::TypeCheck(ValueKind::String)])
    }

    /// Boolean.
    pub fn boolean() -> Self {
        Self::new(vec![Rule::TypeCheck(ValueKind::Bool)])
    }

    /// Integer.
    pub fn integer() -> Self {
        Self::new(vec![Rule::TypeCheck(ValueKind::Int)])
    }

    /// Float (integers widen).
    pub fn float() -> Self {
        Self::new(vec![Rule::TypeCheck(ValueKind::Float)])
    }

    /// Any numeric value.
    pub fn number() -> Self {
        Self::new(vec![Rule::TypeCheck(ValueKind::Number)])
    }

    /// String of bounded length.
    pub fn sized_string(maxlen: usize) -> Self {
        Self::new(vec![
            Rule::TypeCheck(ValueKind::String),
            Rule::MaxLengthCheck(maxlen),
        ])
    }

    /// String matching a pattern from its start.
    pub fn regex_string(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(vec![
            Rule::TypeCheck(ValueKind::String),
            Rule::pattern(pattern)?,
        ]))
    }

    /// String of bounded length matching a pattern from its start.
    pub fn sized_regex_string(maxlen: usize, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(vec![
            Rule::TypeCheck(ValueKind::String),
            Rule::MaxLengthCheck(maxlen),
            Rule::pattern(pattern)?,
        ]))
    }

    /// Positive numeric value.
    pub fn positive_number() -> Self {
        Self::new(vec![
            Rule::TypeCheck(ValueKind::Number),
            Rule::PositiveCheck,
        ])
    }

    /// Positive integer.
    pub fn positive_integer() -> Self {
        Self::new(vec![Rule::TypeCheck(ValueKind::Int), Rule::PositiveCheck])
    }

    /// Positive float.
    pub fn positive_float() -> Self {
        Self::new(vec![Rule::TypeCheck(ValueKind::Float), Rule::PositiveCheck])
    }

    /// Checks a candidate value against every rule in order.
    pub fn check(&self, value: &Value) -> ValidationResult {
        for rule in &self.rules {
            rule.check(value)?;
        }
        Ok(())
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns whether the chain is unconstrained.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
