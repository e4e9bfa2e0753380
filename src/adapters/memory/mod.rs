//! In-memory adapters for development and tests

mod profile_repository;
mod profile_type_registry;

pub use profile_repository::InMemoryProfileRepository;
pub use profile_type_registry::InMemoryProfileTypeRegistry;
