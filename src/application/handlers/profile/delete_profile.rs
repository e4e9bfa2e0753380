//! DeleteProfile - Query handler for the profile delete confirmation form.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::profile::ProfileType;
use crate::ports::{FormMode, FormPresenter, FormSubject, ProfileRepository, RenderableForm};

use super::edit_profile::load_owned_profile;
use super::DispatchError;

/// Query for the delete form of one stored profile.
#[derive(Debug, Clone)]
pub struct DeleteProfileQuery {
    pub user_id: UserId,
    pub profile_type: ProfileType,
    pub profile_id: ProfileId,
}

/// Handler for the delete form. Deletion itself happens on form submission.
pub struct DeleteProfileHandler {
    repository: Arc<dyn ProfileRepository>,
    presenter: Arc<dyn FormPresenter>,
}

impl DeleteProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, presenter: Arc<dyn FormPresenter>) -> Self {
        Self {
            repository,
            presenter,
        }
    }

    pub async fn handle(&self, query: DeleteProfileQuery) -> Result<RenderableForm, DispatchError> {
        let profile = load_owned_profile(
            self.repository.as_ref(),
            &query.user_id,
            &query.profile_type,
            query.profile_id,
        )
        .await?;

        debug!(profile_id = %profile.id, "Building profile delete form");
        Ok(self
            .presenter
            .present(FormSubject::Existing(profile), FormMode::Delete))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::profile::test_support::{
        profile, single_type, user, MockProfileRepository, RecordingPresenter,
    };
    use crate::domain::profile::ProfileStatus;

    #[tokio::test]
    async fn builds_delete_form_without_touching_storage() {
        let owner = user("9");
        let record = profile(&owner, &single_type(), ProfileStatus::Active);
        let repo = Arc::new(MockProfileRepository::new().with_profile(record.clone()));
        let presenter = Arc::new(RecordingPresenter::new());
        let handler = DeleteProfileHandler::new(repo.clone(), presenter.clone());

        let form = handler
            .handle(DeleteProfileQuery {
                user_id: owner.clone(),
                profile_type: single_type(),
                profile_id: record.id,
            })
            .await
            .unwrap();

        assert_eq!(form.mode, FormMode::Delete);
        assert_eq!(form.profile_id, Some(record.id));
        assert_eq!(repo.calls(), 1);

        // The profile is still there afterwards
        let again = handler
            .handle(DeleteProfileQuery {
                user_id: owner,
                profile_type: single_type(),
                profile_id: record.id,
            })
            .await;
        assert!(again.is_ok());
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let handler = DeleteProfileHandler::new(
            Arc::new(MockProfileRepository::new()),
            Arc::new(RecordingPresenter::new()),
        );
        let missing = ProfileId::new();

        let err = handler
            .handle(DeleteProfileQuery {
                user_id: user("9"),
                profile_type: single_type(),
                profile_id: missing,
            })
            .await
            .unwrap_err();

        assert_eq!(err, DispatchError::ProfileNotFound(missing));
    }
}
