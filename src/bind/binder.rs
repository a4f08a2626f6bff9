//! Argument-to-field binding and instance construction.

use std::sync::Arc;

use serde_json::Value;

use super::arguments::Arguments;
use super::errors::{ConstructError, ConstructResult};
use crate::instance::RecordInstance;
use crate::record::RecordType;

/// Constructs validated instances of one record type.
///
/// Construction is deterministic: the same arguments against the same
/// record type bind and validate the same way every time.
pub struct Binder {
    record_type: Arc<RecordType>,
}

impl Binder {
    /// Creates a binder for the given record type.
    pub fn new(record_type: Arc<RecordType>) -> Self {
        Self { record_type }
    }

    /// Returns the record type this binder constructs.
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    /// Binds arguments to declared fields and constructs an instance.
    ///
    /// Binding happens first: positional arguments fill fields in
    /// declaration order, keyword arguments fill by name, and any clash,
    /// unknown name, or excess positional argument aborts. Validation then
    /// runs field by field in declaration order, short-circuiting on the
    /// first violation. Only a fully bound, fully validated instance is
    /// ever returned.
    pub fn construct(&self, args: Arguments) -> ConstructResult<RecordInstance> {
        let fields = self.record_type.fields();
        let (positional, keyword) = args.into_parts();

        if positional.len() > fields.len() {
            return Err(ConstructError::TooManyArguments {
                expected: fields.len(),
                given: positional.len(),
            });
        }

        let mut slots: Vec<Option<Value>> = Vec::with_capacity(fields.len());
        slots.resize_with(fields.len(), || None);

        for (position, value) in positional.into_iter().enumerate() {
            slots[position] = Some(value);
        }

        for (name, value) in keyword {
            let position = self
                .record_type
                .position(&name)
                .ok_or_else(|| ConstructError::UnknownField(name.clone()))?;
            if slots[position].is_some() {
                return Err(ConstructError::BoundTwice(name));
            }
            slots[position] = Some(value);
        }

        let mut values = Vec::with_capacity(fields.len());
        for (spec, slot) in fields.iter().zip(slots) {
            let value = slot.ok_or_else(|| {
                ConstructError::MissingField(spec.name().to_string())
            })?;

            spec.chain()
                .check(&value)
                .map_err(|source| ConstructError::Validation {
                    field: spec.name().to_string(),
                    source,
                })?;

            values.push(value);
        }

        Ok(RecordInstance::new(Arc::clone(&self.record_type), values))
    }
}
