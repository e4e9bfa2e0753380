//! Profile type configuration

use serde::Deserialize;
use std::collections::HashSet;

use crate::domain::foundation::ProfileTypeId;
use crate::domain::profile::ProfileType;

use super::error::ValidationError;

/// One configured profile type
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileTypeConfig {
    /// Machine name, e.g. `employee`
    pub id: String,

    /// Human-readable label, e.g. `Employee`
    pub label: String,

    /// Whether a user may hold several profiles of this type
    #[serde(default, alias = "multiple")]
    pub allows_multiple: bool,
}

impl ProfileTypeConfig {
    /// Convert to the domain profile type
    pub fn to_profile_type(&self) -> Result<ProfileType, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidProfileType {
            id: self.id.clone(),
            reason,
        };
        let id = ProfileTypeId::new(self.id.clone()).map_err(|e| invalid(e.to_string()))?;
        ProfileType::new(id, self.label.clone(), self.allows_multiple)
            .map_err(|e| invalid(e.to_string()))
    }
}

/// Validate and convert every configured profile type
pub fn build_profile_types(
    configs: &[ProfileTypeConfig],
) -> Result<Vec<ProfileType>, ValidationError> {
    let mut seen = HashSet::new();
    configs
        .iter()
        .map(|config| {
            if !seen.insert(config.id.as_str()) {
                return Err(ValidationError::DuplicateProfileType(config.id.clone()));
            }
            config.to_profile_type()
        })
        .collect()
}
