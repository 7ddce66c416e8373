//! `catalog-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the shared error model, argument validation used by every domain factory, and
//! the marker traits for entities and value objects.

pub mod entity;
pub mod error;
pub mod validate;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
