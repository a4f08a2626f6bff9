//! Validated record instances.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::errors::{AccessError, AccessResult};
use crate::record::RecordType;

/// One concrete record: a committed value for every declared field.
///
/// Instances are only created by a binder, so every value has already
/// passed its field's rule chain. Assignment re-runs the chain before
/// committing; a rejected value leaves the prior one untouched.
#[derive(Debug, Clone)]
pub struct RecordInstance {
    record_type: Arc<RecordType>,
    values: Vec<Value>,
}

impl RecordInstance {
    pub(crate) fn new(record_type: Arc<RecordType>, values: Vec<Value>) -> Self {
        debug_assert_eq!(record_type.field_count(), values.len());
        Self {
            record_type,
            values,
        }
    }

    /// Returns the record type this instance was constructed from.
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    /// Gets a field value.
    pub fn get(&self, field: &str) -> AccessResult<&Value> {
        let position = self
            .record_type
            .position(field)
            .ok_or_else(|| AccessError::UnknownField(field.to_string()))?;
        Ok(&self.values[position])
    }

    /// Sets a field value after re-running its rule chain.
    ///
    /// Validate-then-commit: if the chain rejects the candidate, the prior
    /// value is retained unchanged.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> AccessResult<()> {
        let position = self
            .record_type
            .position(field)
            .ok_or_else(|| AccessError::UnknownField(field.to_string()))?;

        let value = value.into();
        self.record_type.fields()[position]
            .chain()
            .check(&value)
            .map_err(|source| AccessError::Validation {
                field: field.to_string(),
                source,
            })?;

        self.values[position] = value;
        Ok(())
    }

    /// Refuses to delete a field.
    ///
    /// Declared fields are permanent; only their values change, and only
    /// through `set`.
    pub fn unset(&mut self, field: &str) -> AccessResult<()> {
        if !self.record_type.contains(field) {
            return Err(AccessError::UnknownField(field.to_string()));
        }
        Err(AccessError::ImmutableField(field.to_string()))
    }

    /// Returns `(name, value)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.record_type
            .field_names()
            .zip(self.values.iter())
    }
}

/// Field-for-field equality between instances of the same record type.
impl PartialEq for RecordInstance {
    fn eq(&self, other: &Self) -> bool {
        self.record_type.name() == other.record_type.name() && self.values == other.values
    }
}

impl fmt::Display for RecordInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.record_type.name())?;
        for (i, (name, value)) in self.entries().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::{Arguments, Binder};
    use crate::record::RecordTypeBuilder;
    use crate::validate::RuleChain;
    use serde_json::json;

    fn good_instance() -> RecordInstance {
        let record_type = RecordTypeBuilder::new("Good")
            .field("name", RuleChain::string())
            .field("price", RuleChain::positive_number())
            .field("quantity", RuleChain::positive_integer())
            .build()
            .unwrap();

        Binder::new(Arc::new(record_type))
            .construct(
                Arguments::new()
                    .keyword("name", "Banana")
                    .keyword("quantity", 4)
                    .keyword("price", 10),
            )
            .unwrap()
    }

    #[test]
    fn test_get_declared_fields() {
        let good = good_instance();
        assert_eq!(good.get("name").unwrap(), &json!("Banana"));
        assert_eq!(good.get("price").unwrap(), &json!(10));
        assert_eq!(good.get("quantity").unwrap(), &json!(4));
    }

    #[test]
    fn test_get_unknown_field() {
        let good = good_instance();
        assert!(matches!(
            good.get("weight"),
            Err(AccessError::UnknownField(_))
        ));
    }

    #[test]
    fn test_set_revalidates() {
        let mut good = good_instance();
        good.set("quantity", 7).unwrap();
        assert_eq!(good.get("quantity").unwrap(), &json!(7));

        let err = good.set("quantity", 0).unwrap_err();
        match err {
            AccessError::Validation { field, source } => {
                assert_eq!(field, "quantity");
                assert_eq!(source.rule(), "positive_check");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
        // Prior value retained after the rejected assignment
        assert_eq!(good.get("quantity").unwrap(), &json!(7));
    }

    #[test]
    fn test_set_unknown_field() {
        let mut good = good_instance();
        assert!(matches!(
            good.set("weight", 1),
            Err(AccessError::UnknownField(_))
        ));
    }

    #[test]
    fn test_unset_always_refused() {
        let mut good = good_instance();
        assert!(matches!(
            good.unset("price"),
            Err(AccessError::ImmutableField(_))
        ));
        assert!(matches!(
            good.unset("weight"),
            Err(AccessError::UnknownField(_))
        ));
        // Value untouched by the refused deletion
        assert_eq!(good.get("price").unwrap(), &json!(10));
    }

    #[test]
    fn test_entries_in_declaration_order() {
        let good = good_instance();
        let names: Vec<_> = good.entries().map(|(name, _)| name).collect();
        assert_eq!(names, ["name", "price", "quantity"]);
    }

    #[test]
    fn test_display() {
        let good = good_instance();
        assert_eq!(
            format!("{}", good),
            "Good(name=\"Banana\", price=10, quantity=4)"
        );
    }
}
