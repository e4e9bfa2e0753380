//! In-Memory Profile Repository Adapter
//!
//! Stores profiles in insertion order. Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ProfileId, ProfileTypeId, UserId};
use crate::domain::profile::{ProfileRecord, ProfileStatus};
use crate::ports::{ProfileRepository, RepositoryError};

/// In-memory storage for profiles
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<ProfileRecord>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryProfileRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a profile, replacing any stored profile with the same id.
    /// A replaced profile keeps its position.
    pub async fn insert(&self, profile: ProfileRecord) {
        let mut profiles = self.profiles.write().await;
        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => profiles.push(profile),
        }
    }

    /// Make every subsequent read fail until switched back (useful for tests)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Get the number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// True when nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable(
                "in-memory profile store switched off".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_active(
        &self,
        user: &UserId,
        profile_type: &ProfileTypeId,
    ) -> Result<Option<ProfileRecord>, RepositoryError> {
        self.check_available()?;
        let profiles = self.profiles.read().await;
        Ok(profiles
            .iter()
            .find(|p| p.belongs_to(user, profile_type) && p.is_active())
            .cloned())
    }

    async fn find_all_by_status(
        &self,
        user: &UserId,
        profile_type: &ProfileTypeId,
        status: ProfileStatus,
    ) -> Result<Vec<ProfileRecord>, RepositoryError> {
        self.check_available()?;
        let profiles = self.profiles.read().await;
        Ok(profiles
            .iter()
            .filter(|p| p.belongs_to(user, profile_type) && p.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ProfileId) -> Result<Option<ProfileRecord>, RepositoryError> {
        self.check_available()?;
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn type_id(id: &str) -> ProfileTypeId {
        ProfileTypeId::new(id).unwrap()
    }

    fn record(owner: &str, profile_type: &str, status: ProfileStatus) -> ProfileRecord {
        ProfileRecord::new(user(owner), type_id(profile_type), status, json!({}))
    }

    #[tokio::test]
    async fn find_all_by_status_preserves_insertion_order() {
        let repo = InMemoryProfileRepository::new();
        let first = record("1", "employee", ProfileStatus::Active);
        let skipped = record("1", "employee", ProfileStatus::NotActive);
        let second = record("1", "employee", ProfileStatus::Active);
        repo.insert(first.clone()).await;
        repo.insert(skipped).await;
        repo.insert(second.clone()).await;

        let active = repo
            .find_all_by_status(&user("1"), &type_id("employee"), ProfileStatus::Active)
            .await
            .unwrap();

        assert_eq!(active, vec![first, second]);
    }

    #[tokio::test]
    async fn find_active_filters_by_owner_type_and_status() {
        let repo = InMemoryProfileRepository::new();
        repo.insert(record("2", "main", ProfileStatus::Active)).await;
        repo.insert(record("1", "billing", ProfileStatus::Active)).await;
        repo.insert(record("1", "main", ProfileStatus::NotActive)).await;

        let found = repo.find_active(&user("1"), &type_id("main")).await.unwrap();
        assert!(found.is_none());

        let wanted = record("1", "main", ProfileStatus::Active);
        repo.insert(wanted.clone()).await;
        let found = repo.find_active(&user("1"), &type_id("main")).await.unwrap();
        assert_eq!(found, Some(wanted));
    }

    #[tokio::test]
    async fn insert_replaces_same_id_in_place() {
        let repo = InMemoryProfileRepository::new();
        let mut profile = record("1", "main", ProfileStatus::Active);
        repo.insert(profile.clone()).await;
        repo.insert(record("1", "main", ProfileStatus::NotActive)).await;

        profile.status = ProfileStatus::NotActive;
        repo.insert(profile.clone()).await;

        assert_eq!(repo.len().await, 2);
        let inactive = repo
            .find_all_by_status(&user("1"), &type_id("main"), ProfileStatus::NotActive)
            .await
            .unwrap();
        assert_eq!(inactive[0], profile);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_read() {
        let repo = InMemoryProfileRepository::new();
        repo.set_unavailable(true);

        assert!(repo.find_by_id(ProfileId::new()).await.is_err());
        assert!(repo.find_active(&user("1"), &type_id("main")).await.is_err());

        repo.set_unavailable(false);
        assert!(repo.find_by_id(ProfileId::new()).await.unwrap().is_none());
    }
}
