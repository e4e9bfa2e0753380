//! HTTP DTOs for profile endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::{ProfileListing, ProfilePage, ProfileSection};
use crate::domain::profile::{AddAction, ProfileRecord, ProfileStatus, ProfileType};
use crate::ports::{FormMode, RenderableForm};

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Profile type as exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileTypeResponse {
    pub id: String,
    pub label: String,
    pub allows_multiple: bool,
}

impl From<ProfileType> for ProfileTypeResponse {
    fn from(profile_type: ProfileType) -> Self {
        Self {
            id: profile_type.id().to_string(),
            label: profile_type.label().to_string(),
            allows_multiple: profile_type.allows_multiple(),
        }
    }
}

/// Stored profile as shown in a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub owner: String,
    pub profile_type: String,
    pub active: bool,
    pub fields: serde_json::Value,
    pub created_at: String,
    pub changed_at: String,
}

impl From<ProfileRecord> for ProfileResponse {
    fn from(record: ProfileRecord) -> Self {
        Self {
            id: record.id.to_string(),
            owner: record.owner.to_string(),
            profile_type: record.profile_type.to_string(),
            active: record.status == ProfileStatus::Active,
            fields: record.fields,
            created_at: record.created_at.to_string(),
            changed_at: record.changed_at.to_string(),
        }
    }
}

/// Form description for the client-side renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormResponse {
    pub form_id: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    pub owner: String,
    pub profile_type: String,
    pub action: String,
    pub submit_label: String,
    pub values: serde_json::Map<String, serde_json::Value>,
}

impl From<RenderableForm> for FormResponse {
    fn from(form: RenderableForm) -> Self {
        Self {
            form_id: form.form_id,
            mode: form.mode.to_string(),
            title: form.title,
            profile_id: form.profile_id.map(|id| id.to_string()),
            active: form.active,
            owner: form.owner.to_string(),
            profile_type: form.profile_type.to_string(),
            action: form.action,
            submit_label: form.submit_label,
            values: form.values,
        }
    }
}

/// "Add new" link shown above a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddLinkResponse {
    pub text: String,
    pub route_name: String,
    pub path: String,
}

impl From<AddAction> for AddLinkResponse {
    fn from(action: AddAction) -> Self {
        Self {
            text: action.text,
            route_name: action.route_name,
            path: action.path,
        }
    }
}

/// Titled group of profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionResponse {
    pub title: String,
    pub items: Vec<ProfileResponse>,
}

impl From<ProfileSection> for SectionResponse {
    fn from(section: ProfileSection) -> Self {
        Self {
            title: section.title,
            items: section.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// The profile page: one form, or a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "workflow", rename_all = "snake_case")]
pub enum ProfilePageResponse {
    Add {
        form: FormResponse,
    },
    Edit {
        form: FormResponse,
    },
    Listing {
        add_link: AddLinkResponse,
        active: SectionResponse,
        inactive: SectionResponse,
    },
}

impl From<ProfilePage> for ProfilePageResponse {
    fn from(page: ProfilePage) -> Self {
        match page {
            ProfilePage::Form(form) if form.mode == FormMode::Add => Self::Add { form: form.into() },
            ProfilePage::Form(form) => Self::Edit { form: form.into() },
            ProfilePage::Listing(ProfileListing {
                add_link,
                active,
                inactive,
            }) => Self::Listing {
                add_link: add_link.into(),
                active: active.into(),
                inactive: inactive.into(),
            },
        }
    }
}

/// Page title of a profile type's add form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleResponse {
    pub title: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, ProfileTypeId, UserId};
    use serde_json::json;

    fn employee() -> ProfileType {
        ProfileType::new(ProfileTypeId::new("employee").unwrap(), "Employee", true).unwrap()
    }

    #[test]
    fn listing_page_serializes_with_workflow_tag() {
        let owner = UserId::new("3").unwrap();
        let record = ProfileRecord::new(
            owner.clone(),
            employee().id().clone(),
            ProfileStatus::Active,
            json!({"job_title": "Engineer"}),
        );
        let page = ProfilePage::Listing(ProfileListing {
            add_link: AddAction::for_user(&owner, &employee()),
            active: ProfileSection {
                title: "Active Employee".into(),
                items: vec![record],
            },
            inactive: ProfileSection {
                title: "Inactive Employee".into(),
                items: vec![],
            },
        });

        let value = serde_json::to_value(ProfilePageResponse::from(page)).unwrap();

        assert_eq!(value["workflow"], "listing");
        assert_eq!(value["add_link"]["path"], "/user/3/edit/profile/employee/add");
        assert_eq!(value["active"]["items"][0]["fields"]["job_title"], "Engineer");
        assert_eq!(value["inactive"]["items"], json!([]));
    }

    #[test]
    fn error_response_carries_code_and_message() {
        let value = serde_json::to_value(ErrorResponse::new(
            ErrorCode::ProfileTypeNotFound,
            "Profile type not found: employee",
        ))
        .unwrap();
        assert_eq!(
            value,
            json!({"code": "PROFILE_TYPE_NOT_FOUND", "message": "Profile type not found: employee"})
        );
    }
}
