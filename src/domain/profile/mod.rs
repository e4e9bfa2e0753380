//! Profile module - profiles, profile types and dispatch workflows.
//!
//! # Domain Invariants
//!
//! 1. Each profile belongs to exactly one user and one profile type
//! 2. A profile type that does not allow multiple profiles never shows more
//!    than one active profile workflow for a user
//! 3. Dispatch never creates, mutates or deletes profiles

mod profile_type;
mod record;
mod workflow;

pub use profile_type::ProfileType;
pub use record::{NewProfile, ProfileRecord, ProfileStatus};
pub use workflow::{user_profile_path, AddAction, DispatchResult};
