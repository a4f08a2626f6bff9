//! Declarative record descriptions.
//!
//! A `RecordDecl` is the serialized form of a record type: the record name
//! plus an ordered field list, each field naming one of the composite
//! constraints. This is the interchange format an external declaration
//! source produces; building it goes through the same two-phase builder as
//! programmatic declarations.

use serde::{Deserialize, Serialize};

use super::builder::RecordTypeBuilder;
use super::errors::{DeclarationError, DeclarationResult};
use super::spec::RecordType;
use crate::validate::RuleChain;

/// Composite constraint declarations, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintDecl {
    /// Any value
    Any,
    /// String of any length
    String,
    /// Boolean
    Bool,
    /// Integer
    Int,
    /// Float (integers widen)
    Float,
    /// Any numeric value
    Number,
    /// String of bounded length
    SizedString {
        /// Maximum length in characters
        maxlen: usize,
    },
    /// String matching a pattern from its start
    RegexString {
        /// Start-anchored pattern
        pattern: String,
    },
    /// String of bounded length matching a pattern from its start
    SizedRegexString {
        /// Maximum length in characters
        maxlen: usize,
        /// Start-anchored pattern
        pattern: String,
    },
    /// Positive numeric value
    PositiveNumber,
    /// Positive integer
    PositiveInteger,
    /// Positive float
    PositiveFloat,
}

impl ConstraintDecl {
    /// Resolves the declaration into a rule chain.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if a declared pattern does not compile.
    pub fn chain(&self) -> DeclarationResult<RuleChain> {
        let chain = match self {
            ConstraintDecl::Any => RuleChain::any(),
            ConstraintDecl::String => RuleChain::string(),
            ConstraintDecl::Bool => RuleChain::boolean(),
            ConstraintDecl::Int => RuleChain::integer(),
            ConstraintDecl::Float => RuleChain::float(),
            ConstraintDecl::Number => RuleChain::number(),
            ConstraintDecl::SizedString { maxlen } => RuleChain::sized_string(*maxlen),
            ConstraintDecl::RegexString { pattern } => {
                RuleChain::regex_string(pattern).map_err(|e| invalid_pattern(pattern, e))?
            }
            ConstraintDecl::SizedRegexString { maxlen, pattern } => {
                RuleChain::sized_regex_string(*maxlen, pattern)
                    .map_err(|e| invalid_pattern(pattern, e))?
            }
            ConstraintDecl::PositiveNumber => RuleChain::positive_number(),
            ConstraintDecl::PositiveInteger => RuleChain::positive_integer(),
            ConstraintDecl::PositiveFloat => RuleChain::positive_float(),
        };
        Ok(chain)
    }
}

fn invalid_pattern(pattern: &str, err: regex::Error) -> DeclarationError {
    DeclarationError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    }
}

/// One declared field: a name plus its constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name, unique within the record
    pub name: String,
    /// Constraint, flattened so `type` sits beside `name`
    #[serde(flatten)]
    pub constraint: ConstraintDecl,
}

impl FieldDecl {
    /// Creates a field declaration.
    pub fn new(name: impl Into<String>, constraint: ConstraintDecl) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }
}

/// A complete record declaration: name plus ordered field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDecl {
    /// Record name
    pub record: String,
    /// Fields in declaration order
    pub fields: Vec<FieldDecl>,
}

impl RecordDecl {
    /// Creates a record declaration.
    pub fn new(record: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self {
            record: record.into(),
            fields,
        }
    }

    /// Builds the declared record type.
    pub fn build(&self) -> DeclarationResult<RecordType> {
        let mut builder = RecordTypeBuilder::new(&self.record);
        for field in &self.fields {
            builder = builder.field(&field.name, field.constraint.chain()?);
        }
        builder.build()
    }
}
