//! Instance subsystem for recval
//!
//! A record instance holds one committed value per declared field. Every
//! mutation re-runs the field's rule chain before the new value commits;
//! on failure the prior value is retained unchanged.
//!
//! # Design Principles
//!
//! - Validate-then-commit: assignment is atomic per field
//! - Fields can never be deleted
//! - Access goes through explicit get/set, never implicit interception

mod errors;
mod instance;

pub use errors::{AccessError, AccessResult};
pub use instance::RecordInstance;
