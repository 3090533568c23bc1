//! Liveness handlers.

use axum::response::IntoResponse;
use axum::Json;

use crate::http::responses::InfoResponse;

/// Root liveness/info endpoint.
pub async fn root_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "TaskTrack API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
