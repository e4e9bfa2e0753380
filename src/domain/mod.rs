//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `profile` - Profiles, profile types and dispatch workflows

pub mod foundation;
pub mod profile;
