//! HTTP server for TaskTrack.
//!
//! Provides endpoints for:
//! - Task CRUD (`/tasks`, `/tasks/:id`)
//! - Liveness/info (`/`)
//! - Health check (`/health`)

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod error;
mod handlers;
pub mod responses;

pub use error::ApiError;

/// Create the HTTP router.
///
/// `allowed_origins` is the cross-origin allow-list. Methods and
/// headers mirror the request because wildcards are not allowed
/// alongside credentials.
pub fn create_router(state: Arc<AppState>, allowed_origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        // API routes
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        // Observability routes
        .route("/", get(handlers::root_info))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
