//! HTTP routes for profile endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    add_page_title, add_profile, delete_profile, edit_profile, list_profile_types,
    user_profile_form, ProfileHandlers,
};

/// Creates the profile router with all endpoints.
pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/user/:user/edit/profile/:profile_type", get(user_profile_form))
        .route("/user/:user/edit/profile/:profile_type/add", get(add_profile))
        .route(
            "/user/:user/edit/profile/:profile_type/:profile",
            get(edit_profile),
        )
        .route(
            "/user/:user/edit/profile/:profile_type/:profile/delete",
            get(delete_profile),
        )
        .route("/profile-types", get(list_profile_types))
        .route("/profile-types/:profile_type/title", get(add_page_title))
        .with_state(handlers)
}
