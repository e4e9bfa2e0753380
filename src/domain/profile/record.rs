//! Profile records and their status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, ProfileTypeId, Timestamp, UserId};

use super::ProfileType;

/// Whether a profile is currently in effect or archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Active,
    NotActive,
}

impl ProfileStatus {
    pub fn is_active(self) -> bool {
        matches!(self, ProfileStatus::Active)
    }

    pub fn from_active_flag(active: bool) -> Self {
        if active {
            ProfileStatus::Active
        } else {
            ProfileStatus::NotActive
        }
    }
}

/// A stored profile attached to a user account.
///
/// `fields` is the opaque payload of the profile's fields; nothing in this
/// crate interprets it beyond handing it to the form presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: ProfileId,
    pub owner: UserId,
    pub profile_type: ProfileTypeId,
    pub status: ProfileStatus,
    #[serde(default)]
    pub fields: serde_json::Value,
    pub created_at: Timestamp,
    pub changed_at: Timestamp,
}

impl ProfileRecord {
    /// Creates a record with a fresh id, stamped now.
    pub fn new(
        owner: UserId,
        profile_type: ProfileTypeId,
        status: ProfileStatus,
        fields: serde_json::Value,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: ProfileId::new(),
            owner,
            profile_type,
            status,
            fields,
            created_at: now,
            changed_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// True when this record belongs to `owner` and is of `profile_type`.
    pub fn belongs_to(&self, owner: &UserId, profile_type: &ProfileTypeId) -> bool {
        &self.owner == owner && &self.profile_type == profile_type
    }
}

/// An unsaved profile handed to the add form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub owner: UserId,
    pub profile_type: ProfileTypeId,
    pub created_at: Timestamp,
}

impl NewProfile {
    pub fn for_owner(owner: &UserId, profile_type: &ProfileType) -> Self {
        Self {
            owner: owner.clone(),
            profile_type: profile_type.id().clone(),
            created_at: Timestamp::now(),
        }
    }
}
