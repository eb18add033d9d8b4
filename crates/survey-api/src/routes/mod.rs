//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers::{health, surveys};
use crate::state::AppState;

/// Create the main API router
///
/// `max_upload_bytes` caps the size of CSV uploads.
pub fn create_router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes(max_upload_bytes))
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new().merge(survey_routes(max_upload_bytes))
}

/// Survey response routes
fn survey_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/surveys/:survey_id/responses/import",
            post(surveys::import_responses).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/surveys/:survey_id/responses", get(surveys::list_responses))
}
