//! Process-local adapters for the repository ports, used by the API and tests.

pub mod items;
pub mod persons;

pub use items::InMemoryItemRepository;
pub use persons::InMemoryPersonRepository;
