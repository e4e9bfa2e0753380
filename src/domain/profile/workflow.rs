//! Dispatch outcomes: which workflow a profile page should show.

use serde::Serialize;

use crate::domain::foundation::{ProfileTypeId, UserId};

use super::{ProfileRecord, ProfileType};

/// Base path of a user's profile pages for one type,
/// `/user/{user}/edit/profile/{profile_type}`.
///
/// User ids are opaque and get percent-encoded as a single path segment.
pub fn user_profile_path(user: &UserId, profile_type: &ProfileTypeId) -> String {
    format!(
        "/user/{}/edit/profile/{}",
        urlencoding::encode(user.as_str()),
        urlencoding::encode(profile_type.as_str())
    )
}

/// Descriptor of the "add new profile" link shown above a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddAction {
    pub text: String,
    pub route_name: String,
    pub route_parameters: Vec<(String, String)>,
    pub path: String,
}

impl AddAction {
    /// Builds the link to the add form of `profile_type` for `user`.
    pub fn for_user(user: &UserId, profile_type: &ProfileType) -> Self {
        let type_id = profile_type.id().as_str();
        Self {
            text: profile_type.add_link_text(),
            route_name: format!("entity.profile.type.{}.user_profile_form.add", type_id),
            route_parameters: vec![
                ("user".to_string(), user.as_str().to_string()),
                ("profile_type".to_string(), type_id.to_string()),
            ],
            path: format!("{}/add", user_profile_path(user, profile_type.id())),
        }
    }
}

/// The single workflow chosen for a (user, profile type) pair.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchResult {
    /// No usable profile exists; show the create form.
    Add {
        owner: UserId,
        profile_type: ProfileType,
    },
    /// Single-profile type with an active profile; show its edit form.
    Edit { profile: ProfileRecord },
    /// Multi-profile type with at least one profile of either status.
    Listing {
        add_action: AddAction,
        active: Vec<ProfileRecord>,
        inactive: Vec<ProfileRecord>,
    },
}

impl DispatchResult {
    /// Short name of the workflow, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchResult::Add { .. } => "add",
            DispatchResult::Edit { .. } => "edit",
            DispatchResult::Listing { .. } => "listing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_action_targets_add_route() {
        let user = UserId::new("12").unwrap();
        let profile_type =
            ProfileType::new(ProfileTypeId::new("employee").unwrap(), "Employee", true).unwrap();

        let action = AddAction::for_user(&user, &profile_type);

        assert_eq!(action.text, "Add new Employee");
        assert_eq!(
            action.route_name,
            "entity.profile.type.employee.user_profile_form.add"
        );
        assert_eq!(action.path, "/user/12/edit/profile/employee/add");
        assert_eq!(
            action.route_parameters,
            vec![
                ("user".to_string(), "12".to_string()),
                ("profile_type".to_string(), "employee".to_string()),
            ]
        );
    }

    #[test]
    fn add_action_escapes_opaque_user_id() {
        let user = UserId::new("a b/c?d").unwrap();
        let profile_type =
            ProfileType::new(ProfileTypeId::new("employee").unwrap(), "Employee", true).unwrap();

        let action = AddAction::for_user(&user, &profile_type);

        assert_eq!(action.path, "/user/a%20b%2Fc%3Fd/edit/profile/employee/add");
        // Route parameters keep the raw id
        assert_eq!(action.route_parameters[0].1, "a b/c?d");
    }
}
