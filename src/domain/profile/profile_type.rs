//! Profile type configuration entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileTypeId, ValidationError};

/// Category of profiles a user may hold, e.g. "Employee" or "Billing address".
///
/// Loaded by the host and read-only for this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileType {
    id: ProfileTypeId,
    label: String,
    /// Whether a user may own more than one profile of this type.
    #[serde(default, alias = "multiple")]
    allows_multiple: bool,
}

impl ProfileType {
    pub fn new(
        id: ProfileTypeId,
        label: impl Into<String>,
        allows_multiple: bool,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        Ok(Self {
            id,
            label,
            allows_multiple,
        })
    }

    pub fn id(&self) -> &ProfileTypeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn allows_multiple(&self) -> bool {
        self.allows_multiple
    }

    /// Page title of the add form: `Create {label}`.
    pub fn create_title(&self) -> String {
        format!("Create {}", self.label)
    }

    /// Text of the "add another" link in the listing.
    pub fn add_link_text(&self) -> String {
        format!("Add new {}", self.label)
    }

    pub fn active_section_title(&self) -> String {
        format!("Active {}", self.label)
    }

    pub fn inactive_section_title(&self) -> String {
        format!("Inactive {}", self.label)
    }
}
