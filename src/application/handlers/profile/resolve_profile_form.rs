//! ProfileDispatchResolver - decides between the add, edit and listing
//! workflows of a user's profile page.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::foundation::UserId;
use crate::domain::profile::{
    AddAction, DispatchResult, NewProfile, ProfileRecord, ProfileStatus, ProfileType,
};
use crate::ports::{
    FormMode, FormPresenter, FormSubject, ProfileRepository, RenderableForm, RepositoryError,
};

use super::DispatchError;

/// Titled group of profiles in a listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSection {
    pub title: String,
    pub items: Vec<ProfileRecord>,
}

/// Listing of a user's profiles of one multi-profile type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileListing {
    pub add_link: AddAction,
    pub active: ProfileSection,
    pub inactive: ProfileSection,
}

/// What the profile page shows once a workflow has been chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfilePage {
    Form(RenderableForm),
    Listing(ProfileListing),
}

/// Chooses the workflow for a (user, profile type) pair.
///
/// Holds no state between calls; every call re-reads the repository.
pub struct ProfileDispatchResolver {
    repository: Arc<dyn ProfileRepository>,
    presenter: Arc<dyn FormPresenter>,
}

impl ProfileDispatchResolver {
    pub fn new(repository: Arc<dyn ProfileRepository>, presenter: Arc<dyn FormPresenter>) -> Self {
        Self {
            repository,
            presenter,
        }
    }

    /// Decide which workflow applies to `user` and `profile_type`.
    ///
    /// Single-profile types yield `Edit` for the active profile, or `Add`.
    /// Multi-profile types yield `Add` when the user has no profile of
    /// either status, and `Listing` otherwise.
    pub async fn resolve(
        &self,
        user: &UserId,
        profile_type: &ProfileType,
    ) -> Result<DispatchResult, DispatchError> {
        ensure_present(user, profile_type)?;
        let type_id = profile_type.id();

        let result = if !profile_type.allows_multiple() {
            match self
                .repository
                .find_active(user, type_id)
                .await
                .map_err(|e| repository_failure(user, profile_type, e))?
            {
                Some(profile) => DispatchResult::Edit { profile },
                None => add_workflow(user, profile_type),
            }
        } else {
            let active = self
                .repository
                .find_all_by_status(user, type_id, ProfileStatus::Active)
                .await
                .map_err(|e| repository_failure(user, profile_type, e))?;
            let inactive = self
                .repository
                .find_all_by_status(user, type_id, ProfileStatus::NotActive)
                .await
                .map_err(|e| repository_failure(user, profile_type, e))?;

            if active.is_empty() && inactive.is_empty() {
                add_workflow(user, profile_type)
            } else {
                DispatchResult::Listing {
                    add_action: AddAction::for_user(user, profile_type),
                    active,
                    inactive,
                }
            }
        };

        debug!(
            user = %user,
            profile_type = %type_id,
            workflow = result.kind(),
            "Resolved profile workflow"
        );
        Ok(result)
    }

    /// Page title of the add form.
    pub fn title_for(profile_type: &ProfileType) -> String {
        profile_type.create_title()
    }

    /// Turn a dispatch result into the page to render.
    pub fn present(&self, profile_type: &ProfileType, result: DispatchResult) -> ProfilePage {
        match result {
            DispatchResult::Add {
                owner,
                profile_type: add_type,
            } => {
                let subject = FormSubject::New(NewProfile::for_owner(&owner, &add_type));
                let form = self
                    .presenter
                    .present(subject, FormMode::Add)
                    .with_title(Self::title_for(&add_type));
                ProfilePage::Form(form)
            }
            DispatchResult::Edit { profile } => ProfilePage::Form(
                self.presenter
                    .present(FormSubject::Existing(profile), FormMode::Edit),
            ),
            DispatchResult::Listing {
                add_action,
                active,
                inactive,
            } => ProfilePage::Listing(ProfileListing {
                add_link: add_action,
                active: ProfileSection {
                    title: profile_type.active_section_title(),
                    items: active,
                },
                inactive: ProfileSection {
                    title: profile_type.inactive_section_title(),
                    items: inactive,
                },
            }),
        }
    }

    /// Resolve and present in one step.
    pub async fn resolve_page(
        &self,
        user: &UserId,
        profile_type: &ProfileType,
    ) -> Result<ProfilePage, DispatchError> {
        let result = self.resolve(user, profile_type).await?;
        Ok(self.present(profile_type, result))
    }
}

fn add_workflow(user: &UserId, profile_type: &ProfileType) -> DispatchResult {
    DispatchResult::Add {
        owner: user.clone(),
        profile_type: profile_type.clone(),
    }
}

/// Inputs that arrived through deserialization may carry blank ids.
pub(super) fn ensure_present(user: &UserId, profile_type: &ProfileType) -> Result<(), DispatchError> {
    if user.is_blank() {
        return Err(DispatchError::invalid_argument("user", "user identity is missing"));
    }
    if profile_type.id().is_blank() {
        return Err(DispatchError::invalid_argument(
            "profile_type",
            "profile type is missing",
        ));
    }
    Ok(())
}

fn repository_failure(
    user: &UserId,
    profile_type: &ProfileType,
    error: RepositoryError,
) -> DispatchError {
    warn!(
        user = %user,
        profile_type = %profile_type.id(),
        error = %error,
        "Profile repository failed during dispatch"
    );
    DispatchError::RepositoryUnavailable(error)
}
