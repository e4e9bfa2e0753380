//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values come from an optional `profile_dispatch`
//! file (TOML, YAML or JSON) overridden by environment variables with the
//! `PROFILE_DISPATCH` prefix; nested values use double underscores.
//!
//! Profile types are a list and can only be configured through the file.
//!
//! # Example
//!
//! ```no_run
//! use profile_dispatch::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Binding to {}:{}", config.server.host, config.server.port);
//! ```

mod database;
mod error;
mod profile_types;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use profile_types::{build_profile_types, ProfileTypeConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::path::Path;

use crate::domain::profile::ProfileType;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL profile storage; profiles are kept in memory when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Configured profile types
    #[serde(default)]
    pub profile_types: Vec<ProfileTypeConfig>,
}

impl AppConfig {
    /// Load configuration from `profile_dispatch.*` in the working directory
    /// (if present) and environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `PROFILE_DISPATCH__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PROFILE_DISPATCH__DATABASE__URL=...` -> `database.url = ...`
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("profile_dispatch").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from an explicit file, still overridable by
    /// environment variables
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        build_profile_types(&self.profile_types)?;
        Ok(())
    }

    /// Configured profile types as domain values
    pub fn profile_types(&self) -> Result<Vec<ProfileType>, ValidationError> {
        build_profile_types(&self.profile_types)
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix("PROFILE_DISPATCH")
        .separator("__")
}
