//! Binding subsystem for recval
//!
//! Binds constructor arguments to declared fields and produces validated
//! record instances.
//!
//! # Design Principles
//!
//! - Positional arguments fill fields in declaration order
//! - Keyword arguments fill fields by name
//! - A field bound twice, an unknown name, a missing field, or excess
//!   positional arguments abort the construction
//! - Every bound value passes its field's rule chain before the instance
//!   exists; no partially constructed instance ever escapes

mod arguments;
mod binder;
mod errors;

pub use arguments::Arguments;
pub use binder::Binder;
pub use errors::{ConstructError, ConstructResult};
