//! HTTP adapters - REST API implementations.
//!
//! `app_router` mounts the profile endpoints together with the
//! cross-cutting layers (request tracing, timeout).

pub mod profile;

use std::time::Duration;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use profile::{profile_routes, ProfileHandlers};

/// Full application router.
pub fn app_router(handlers: ProfileHandlers, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(profile_routes(handlers))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
