//! recval - A strict, deterministic record validation framework
//!
//! Record types declare an ordered list of named, rule-checked fields.
//! Instances are constructed by binding positional and keyword arguments
//! against the declared field order; every value passes its field's rule
//! chain before it commits, at construction and on every assignment.

pub mod bind;
pub mod instance;
pub mod record;
pub mod validate;
pub mod value;
