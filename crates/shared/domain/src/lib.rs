//! Domain layer - Core entities and value objects.
//!
//! This crate contains pure domain types with no infrastructure dependencies.

pub mod constants;
pub mod person;

pub use constants::*;
pub use person::{Person, UpsertPerson};
