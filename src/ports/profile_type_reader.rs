//! ProfileTypeReader port for profile type lookups

use async_trait::async_trait;

use crate::domain::{foundation::ProfileTypeId, profile::ProfileType};

use super::RepositoryError;

/// Query operations for profile types
#[async_trait]
pub trait ProfileTypeReader: Send + Sync {
    /// Find a profile type by machine name
    async fn find(&self, id: &ProfileTypeId) -> Result<Option<ProfileType>, RepositoryError>;

    /// All known profile types, ordered by id
    async fn list(&self) -> Result<Vec<ProfileType>, RepositoryError>;
}
