//! Shared data model for Roam map files.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_map};
