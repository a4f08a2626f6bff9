//! Two-phase record type builder.
//!
//! Phase one collects raw `(name, chain)` declarations in source order;
//! phase two (`build`) resolves them into immutable field specs. This is
//! where late name binding happens: a chain is declared without knowing its
//! field name, and the build step back-fills it from the declaration.

use std::collections::HashSet;

use super::errors::{DeclarationError, DeclarationResult};
use super::spec::{FieldSpec, RecordType};
use crate::validate::RuleChain;

/// Builder for a [`RecordType`].
#[derive(Debug, Default)]
pub struct RecordTypeBuilder {
    name: String,
    declared: Vec<(String, RuleChain)>,
}

impl RecordTypeBuilder {
    /// Starts a declaration for a record with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared: Vec::new(),
        }
    }

    /// Declares a field. Fields bind positionally in the order declared.
    pub fn field(mut self, name: impl Into<String>, chain: RuleChain) -> Self {
        self.declared.push((name.into(), chain));
        self
    }

    /// Resolves the collected declarations into an immutable record type.
    ///
    /// # Errors
    ///
    /// - `EmptyFieldName` if a declared name is empty
    /// - `DuplicateField` if two declarations share a name
    pub fn build(self) -> DeclarationResult<RecordType> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(self.declared.len());

        for (position, (name, chain)) in self.declared.into_iter().enumerate() {
            if name.is_empty() {
                return Err(DeclarationError::EmptyFieldName { position });
            }
            if !seen.insert(name.clone()) {
                return Err(DeclarationError::DuplicateField(name));
            }
            fields.push(FieldSpec::new(name, chain));
        }

        Ok(RecordType::new(self.name, fields))
    }
}
