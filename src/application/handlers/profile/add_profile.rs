//! AddProfile - Query handler for the profile add form.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::UserId;
use crate::domain::profile::{NewProfile, ProfileType};
use crate::ports::{FormMode, FormPresenter, FormSubject, RenderableForm};

use super::resolve_profile_form::ensure_present;
use super::{DispatchError, ProfileDispatchResolver};

/// Query for the add form of a profile type.
#[derive(Debug, Clone)]
pub struct AddProfileQuery {
    pub user_id: UserId,
    pub profile_type: ProfileType,
}

/// Handler for the add form.
pub struct AddProfileHandler {
    presenter: Arc<dyn FormPresenter>,
}

impl AddProfileHandler {
    pub fn new(presenter: Arc<dyn FormPresenter>) -> Self {
        Self { presenter }
    }

    pub fn handle(&self, query: AddProfileQuery) -> Result<RenderableForm, DispatchError> {
        ensure_present(&query.user_id, &query.profile_type)?;

        // Pre-fill owner and creation time on the unsaved profile
        let new_profile = NewProfile::for_owner(&query.user_id, &query.profile_type);
        debug!(
            user = %query.user_id,
            profile_type = %query.profile_type.id(),
            "Building profile add form"
        );

        Ok(self
            .presenter
            .present(FormSubject::New(new_profile), FormMode::Add)
            .with_title(ProfileDispatchResolver::title_for(&query.profile_type)))
    }
}
