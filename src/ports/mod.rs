//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileRepository` - Reads stored profiles for a user and type
//! - `ProfileTypeReader` - Resolves profile type machine names
//! - `FormPresenter` - Builds add/edit/delete forms for a profile

mod form_presenter;
mod profile_repository;
mod profile_type_reader;

pub use form_presenter::{FormMode, FormPresenter, FormSubject, RenderableForm};
pub use profile_repository::{ProfileRepository, RepositoryError};
pub use profile_type_reader::ProfileTypeReader;
