//! Person (CRM) domain module.
//!
//! Validation and lifecycle rules for registered persons, plus the command/query
//! repository ports implemented by persistence adapters. No IO lives here.

pub mod person;
pub mod repository;

pub use person::{NewPerson, Person, PersonDetails, PersonId, PersonStatus, MAX_AGE, MIN_AGE};
pub use repository::{PersonCommandRepository, PersonQueryRepository};
