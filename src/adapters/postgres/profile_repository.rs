//! PostgreSQL implementation of ProfileRepository.
//!
//! Reads the `profiles` table created by `migrations/0001_create_profiles.sql`.
//! Sequences are ordered by `created_at, id` so repeated reads agree.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{ProfileId, ProfileTypeId, Timestamp, UserId};
use crate::domain::profile::{ProfileRecord, ProfileStatus};
use crate::ports::{ProfileRepository, RepositoryError};

const SELECT_COLUMNS: &str =
    "SELECT id, owner_id, profile_type, is_active, fields, created_at, changed_at FROM profiles";

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Creates a new PgProfileRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_active(
        &self,
        user: &UserId,
        profile_type: &ProfileTypeId,
    ) -> Result<Option<ProfileRecord>, RepositoryError> {
        let sql = format!(
            "{} WHERE owner_id = $1 AND profile_type = $2 AND is_active \
             ORDER BY created_at, id LIMIT 1",
            SELECT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(user.as_str())
            .bind(profile_type.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| unavailable("find active profile", e))?;

        row.map(row_to_profile).transpose()
    }

    async fn find_all_by_status(
        &self,
        user: &UserId,
        profile_type: &ProfileTypeId,
        status: ProfileStatus,
    ) -> Result<Vec<ProfileRecord>, RepositoryError> {
        let sql = format!(
            "{} WHERE owner_id = $1 AND profile_type = $2 AND is_active = $3 \
             ORDER BY created_at, id",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(user.as_str())
            .bind(profile_type.as_str())
            .bind(status.is_active())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| unavailable("list profiles", e))?;

        rows.into_iter().map(row_to_profile).collect()
    }

    async fn find_by_id(&self, id: ProfileId) -> Result<Option<ProfileRecord>, RepositoryError> {
        let sql = format!("{} WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| unavailable("fetch profile", e))?;

        row.map(row_to_profile).transpose()
    }
}

fn unavailable(action: &str, error: sqlx::Error) -> RepositoryError {
    RepositoryError::Unavailable(format!("Failed to {}: {}", action, error))
}

fn corrupt(column: &str, error: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Corrupt(format!("Invalid {}: {}", column, error))
}

fn row_to_profile(row: PgRow) -> Result<ProfileRecord, RepositoryError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| corrupt("id", e))?;
    let owner: String = row.try_get("owner_id").map_err(|e| corrupt("owner_id", e))?;
    let profile_type: String = row
        .try_get("profile_type")
        .map_err(|e| corrupt("profile_type", e))?;
    let is_active: bool = row.try_get("is_active").map_err(|e| corrupt("is_active", e))?;
    let fields: serde_json::Value = row.try_get("fields").map_err(|e| corrupt("fields", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| corrupt("created_at", e))?;
    let changed_at: chrono::DateTime<chrono::Utc> = row
        .try_get("changed_at")
        .map_err(|e| corrupt("changed_at", e))?;

    Ok(ProfileRecord {
        id: ProfileId::from_uuid(id),
        owner: UserId::new(owner).map_err(|e| corrupt("owner_id", e))?,
        profile_type: ProfileTypeId::new(profile_type).map_err(|e| corrupt("profile_type", e))?,
        status: ProfileStatus::from_active_flag(is_active),
        fields,
        created_at: Timestamp::from_datetime(created_at),
        changed_at: Timestamp::from_datetime(changed_at),
    })
}
