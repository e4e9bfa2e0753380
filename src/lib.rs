//! Profile Dispatch - user profile controller
//!
//! Decides, for a user and a profile type, whether the user should see an
//! empty add form, the edit form of their single active profile, or a
//! listing of their profiles grouped by status.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
