//! Record type subsystem for recval
//!
//! A record type is the declared shape shared by all of its instances: an
//! ordered, duplicate-free list of named, rule-checked fields.
//!
//! # Design Principles
//!
//! - Declaration errors surface at build time, not at first use
//! - Field names are bound late: the registry, not the chain, owns the name
//! - Record types are immutable once built
//! - Declaration order is the single source of truth for field order

mod builder;
mod decl;
mod errors;
mod loader;
mod spec;

pub use builder::RecordTypeBuilder;
pub use decl::{ConstraintDecl, FieldDecl, RecordDecl};
pub use errors::{DeclarationError, DeclarationResult};
pub use loader::DeclLoader;
pub use spec::{FieldSpec, RecordType};
