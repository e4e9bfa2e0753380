//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum routes exposing the profile pages and forms
//! - `forms` - Form presenter producing JSON form descriptions
//! - `memory` - In-memory profile storage and profile type registry
//! - `postgres` - PostgreSQL profile storage

pub mod forms;
pub mod http;
pub mod memory;
pub mod postgres;

pub use forms::JsonFormPresenter;
pub use memory::{InMemoryProfileRepository, InMemoryProfileTypeRegistry};
pub use postgres::PgProfileRepository;
