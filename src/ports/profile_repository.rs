//! ProfileRepository port for profile lookups

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    foundation::{ProfileId, ProfileTypeId, UserId},
    profile::{ProfileRecord, ProfileStatus},
};

/// Failure of the storage behind a [`ProfileRepository`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Profile storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored profile could not be decoded: {0}")]
    Corrupt(String),
}

/// Read access to stored profiles.
///
/// Sequences are returned in storage order (oldest first); callers rely on
/// that order being stable between calls.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the active profile of `profile_type` owned by `user`
    async fn find_active(
        &self,
        user: &UserId,
        profile_type: &ProfileTypeId,
    ) -> Result<Option<ProfileRecord>, RepositoryError>;

    /// Find every profile of `profile_type` owned by `user` with `status`
    async fn find_all_by_status(
        &self,
        user: &UserId,
        profile_type: &ProfileTypeId,
        status: ProfileStatus,
    ) -> Result<Vec<ProfileRecord>, RepositoryError>;

    /// Find profile by profile ID
    async fn find_by_id(&self, id: ProfileId) -> Result<Option<ProfileRecord>, RepositoryError>;
}
