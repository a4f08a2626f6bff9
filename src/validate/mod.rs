//! Rule subsystem for recval
//!
//! A rule is a single named constraint on a candidate field value; a chain
//! composes rules in a fixed order.
//!
//! # Design Principles
//!
//! - Rules are pure functions of the candidate value
//! - Chains run in declaration-derived order
//! - First failure short-circuits, later rules never run
//! - No coercion, no defaulting, no mutation of candidates

mod chain;
mod errors;
mod rule;

pub use chain::RuleChain;
pub use errors::{ValidationError, ValidationResult};
pub use rule::Rule;
