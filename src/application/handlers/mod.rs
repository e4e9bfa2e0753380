//! Application handlers.
//!
//! Query handlers that orchestrate domain decisions over the ports.

pub mod profile;
