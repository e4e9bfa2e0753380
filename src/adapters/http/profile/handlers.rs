//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    AddProfileHandler, AddProfileQuery, DeleteProfileHandler, DeleteProfileQuery, DispatchError,
    EditProfileHandler, EditProfileQuery, ProfileDispatchResolver,
};
use crate::domain::foundation::{ProfileId, ProfileTypeId, UserId};
use crate::domain::profile::ProfileType;
use crate::ports::ProfileTypeReader;

use super::dto::{
    ErrorResponse, FormResponse, ProfilePageResponse, ProfileTypeResponse, TitleResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProfileHandlers {
    resolver: Arc<ProfileDispatchResolver>,
    add_handler: Arc<AddProfileHandler>,
    edit_handler: Arc<EditProfileHandler>,
    delete_handler: Arc<DeleteProfileHandler>,
    profile_types: Arc<dyn ProfileTypeReader>,
}

impl ProfileHandlers {
    pub fn new(
        resolver: Arc<ProfileDispatchResolver>,
        add_handler: Arc<AddProfileHandler>,
        edit_handler: Arc<EditProfileHandler>,
        delete_handler: Arc<DeleteProfileHandler>,
        profile_types: Arc<dyn ProfileTypeReader>,
    ) -> Self {
        Self {
            resolver,
            add_handler,
            edit_handler,
            delete_handler,
            profile_types,
        }
    }

    async fn profile_type(&self, raw: &str) -> Result<ProfileType, Response> {
        let not_found = || handle_dispatch_error(DispatchError::ProfileTypeNotFound(raw.to_string()));

        let id = ProfileTypeId::new(raw).map_err(|_| not_found())?;
        match self.profile_types.find(&id).await {
            Ok(Some(profile_type)) => Ok(profile_type),
            Ok(None) => {
                tracing::debug!(profile_type = raw, "Unknown profile type requested");
                Err(not_found())
            }
            Err(e) => Err(handle_dispatch_error(e.into())),
        }
    }
}

fn parse_user(raw: String) -> Result<UserId, Response> {
    UserId::new(raw).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response()
    })
}

fn parse_profile_id(raw: &str) -> Result<ProfileId, Response> {
    raw.parse::<ProfileId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid profile ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /user/:user/edit/profile/:profile_type - Add form, edit form or listing
pub async fn user_profile_form(
    State(handlers): State<ProfileHandlers>,
    Path((user, profile_type)): Path<(String, String)>,
) -> Response {
    let user = match parse_user(user) {
        Ok(user) => user,
        Err(response) => return response,
    };
    let profile_type = match handlers.profile_type(&profile_type).await {
        Ok(profile_type) => profile_type,
        Err(response) => return response,
    };

    match handlers.resolver.resolve_page(&user, &profile_type).await {
        Ok(page) => {
            let response: ProfilePageResponse = page.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_dispatch_error(e),
    }
}

/// GET /user/:user/edit/profile/:profile_type/add - Add form
pub async fn add_profile(
    State(handlers): State<ProfileHandlers>,
    Path((user, profile_type)): Path<(String, String)>,
) -> Response {
    let user_id = match parse_user(user) {
        Ok(user) => user,
        Err(response) => return response,
    };
    let profile_type = match handlers.profile_type(&profile_type).await {
        Ok(profile_type) => profile_type,
        Err(response) => return response,
    };

    let query = AddProfileQuery {
        user_id,
        profile_type,
    };

    match handlers.add_handler.handle(query) {
        Ok(form) => (StatusCode::OK, Json(FormResponse::from(form))).into_response(),
        Err(e) => handle_dispatch_error(e),
    }
}

/// GET /user/:user/edit/profile/:profile_type/:profile - Edit form
pub async fn edit_profile(
    State(handlers): State<ProfileHandlers>,
    Path((user, profile_type, profile)): Path<(String, String, String)>,
) -> Response {
    let (user_id, profile_type, profile_id) =
        match load_target(&handlers, user, &profile_type, &profile).await {
            Ok(target) => target,
            Err(response) => return response,
        };

    let query = EditProfileQuery {
        user_id,
        profile_type,
        profile_id,
    };

    match handlers.edit_handler.handle(query).await {
        Ok(form) => (StatusCode::OK, Json(FormResponse::from(form))).into_response(),
        Err(e) => handle_dispatch_error(e),
    }
}

/// GET /user/:user/edit/profile/:profile_type/:profile/delete - Delete confirmation form
pub async fn delete_profile(
    State(handlers): State<ProfileHandlers>,
    Path((user, profile_type, profile)): Path<(String, String, String)>,
) -> Response {
    let (user_id, profile_type, profile_id) =
        match load_target(&handlers, user, &profile_type, &profile).await {
            Ok(target) => target,
            Err(response) => return response,
        };

    let query = DeleteProfileQuery {
        user_id,
        profile_type,
        profile_id,
    };

    match handlers.delete_handler.handle(query).await {
        Ok(form) => (StatusCode::OK, Json(FormResponse::from(form))).into_response(),
        Err(e) => handle_dispatch_error(e),
    }
}

/// GET /profile-types - Configured profile types
pub async fn list_profile_types(State(handlers): State<ProfileHandlers>) -> Response {
    match handlers.profile_types.list().await {
        Ok(types) => {
            let response: Vec<ProfileTypeResponse> = types.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_dispatch_error(e.into()),
    }
}

/// GET /profile-types/:profile_type/title - Add form page title
pub async fn add_page_title(
    State(handlers): State<ProfileHandlers>,
    Path(profile_type): Path<String>,
) -> Response {
    match handlers.profile_type(&profile_type).await {
        Ok(profile_type) => {
            let response = TitleResponse {
                title: ProfileDispatchResolver::title_for(&profile_type),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(response) => response,
    }
}

async fn load_target(
    handlers: &ProfileHandlers,
    user: String,
    profile_type: &str,
    profile: &str,
) -> Result<(UserId, ProfileType, ProfileId), Response> {
    let user_id = parse_user(user)?;
    let profile_id = parse_profile_id(profile)?;
    let profile_type = handlers.profile_type(profile_type).await?;
    Ok((user_id, profile_type, profile_id))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_dispatch_error(error: DispatchError) -> Response {
    let code = error.code();
    let status = match &error {
        DispatchError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        DispatchError::ProfileNotFound(_) | DispatchError::ProfileTypeNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        DispatchError::RepositoryUnavailable(source) => {
            tracing::error!("Profile storage unavailable: {}", source);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(code, "Profile storage is unavailable")),
            )
                .into_response();
        }
    };
    (status, Json(ErrorResponse::new(code, error.to_string()))).into_response()
}
