//! Infrastructure layer: in-memory persistence adapters and catalog seeding.

pub mod memory;
pub mod seed;

pub use memory::{InMemoryItemRepository, InMemoryPersonRepository};
pub use seed::{demo_catalog, load_catalog, load_catalog_file, SeedError};
