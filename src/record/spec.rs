//! Built record types and their field specs.

use std::collections::HashMap;

use crate::validate::RuleChain;

/// A declared field on a record type.
///
/// The name is assigned by the registry when the type is built; the chain
/// itself never knows which field it guards.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    chain: RuleChain,
}

impl FieldSpec {
    pub(crate) fn new(name: String, chain: RuleChain) -> Self {
        Self { name, chain }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field's rule chain.
    pub fn chain(&self) -> &RuleChain {
        &self.chain
    }
}

/// The declared shape shared by all instances of a record.
///
/// Immutable after build: an ordered field list plus a name index. Field
/// declaration order is the single source of truth for positional binding.
#[derive(Debug)]
pub struct RecordType {
    name: String,
    fields: Vec<FieldSpec>,
    index: HashMap<String, usize>,
}

impl RecordType {
    pub(crate) fn new(name: String, fields: Vec<FieldSpec>) -> Self {
        let index = fields
            .iter()
            .enumerate()
            .map(|(pos, spec)| (spec.name().to_string(), pos))
            .collect();
        Self {
            name,
            fields,
            index,
        }
    }

    /// Returns the record name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the number of declared fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the declaration position of a field, if declared.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns a field spec by name, if declared.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.position(name).map(|pos| &self.fields[pos])
    }

    /// Returns whether a field is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|spec| spec.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordTypeBuilder;
    use crate::validate::RuleChain;

    fn stock_type() -> RecordType {
        RecordTypeBuilder::new("Stock")
            .field("ticker", RuleChain::sized_regex_string(10, "[A-Z]+$").unwrap())
            .field("name", RuleChain::sized_string(10))
            .field("price", RuleChain::positive_number())
            .field("shares", RuleChain::positive_number())
            .build()
            .unwrap()
    }

    #[test]
    fn test_declaration_order_preserved() {
        let record_type = stock_type();
        let names: Vec<_> = record_type.field_names().collect();
        assert_eq!(names, ["ticker", "name", "price", "shares"]);
    }

    #[test]
    fn test_positions_follow_declaration_order() {
        let record_type = stock_type();
        assert_eq!(record_type.position("ticker"), Some(0));
        assert_eq!(record_type.position("shares"), Some(3));
        assert_eq!(record_type.position("dividend"), None);
    }

    #[test]
    fn test_field_lookup() {
        let record_type = stock_type();
        assert!(record_type.contains("price"));
        assert_eq!(record_type.field("price").unwrap().name(), "price");
        assert!(record_type.field("dividend").is_none());
    }
}
