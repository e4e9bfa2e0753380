//! EditProfile - Query handler for the profile edit form.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::profile::{ProfileRecord, ProfileType};
use crate::ports::{FormMode, FormPresenter, FormSubject, ProfileRepository, RenderableForm};

use super::resolve_profile_form::ensure_present;
use super::DispatchError;

/// Query for the edit form of one stored profile.
#[derive(Debug, Clone)]
pub struct EditProfileQuery {
    pub user_id: UserId,
    pub profile_type: ProfileType,
    pub profile_id: ProfileId,
}

/// Handler for the edit form.
pub struct EditProfileHandler {
    repository: Arc<dyn ProfileRepository>,
    presenter: Arc<dyn FormPresenter>,
}

impl EditProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, presenter: Arc<dyn FormPresenter>) -> Self {
        Self {
            repository,
            presenter,
        }
    }

    pub async fn handle(&self, query: EditProfileQuery) -> Result<RenderableForm, DispatchError> {
        let profile = load_owned_profile(
            self.repository.as_ref(),
            &query.user_id,
            &query.profile_type,
            query.profile_id,
        )
        .await?;

        debug!(profile_id = %profile.id, "Building profile edit form");
        Ok(self
            .presenter
            .present(FormSubject::Existing(profile), FormMode::Edit))
    }
}

/// Load a profile by id, requiring it to belong to `user` and `profile_type`.
///
/// A profile of another user or type is reported as not found.
pub(super) async fn load_owned_profile(
    repository: &dyn ProfileRepository,
    user: &UserId,
    profile_type: &ProfileType,
    profile_id: ProfileId,
) -> Result<ProfileRecord, DispatchError> {
    ensure_present(user, profile_type)?;

    match repository.find_by_id(profile_id).await? {
        Some(profile) if profile.belongs_to(user, profile_type.id()) => Ok(profile),
        Some(_) => {
            warn!(
                %profile_id,
                user = %user,
                profile_type = %profile_type.id(),
                "Profile requested under a foreign user or type"
            );
            Err(DispatchError::ProfileNotFound(profile_id))
        }
        None => Err(DispatchError::ProfileNotFound(profile_id)),
    }
}
