//! Repository layer for data access.
//!
//! Two repositories cover the person table: [`PersonStore`] issues each
//! persistence call itself, [`PersonDataRepository`] gets its operations
//! from the generic [`CrudRepository`].

mod base;
pub mod entities;
mod person_data_repository;
mod person_repository;

pub use base::{CrudRepository, PrimaryKeyOf};
pub use person_data_repository::PersonDataRepository;
pub use person_repository::{PersonRepository, PersonStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use person_repository::MockPersonRepository;
