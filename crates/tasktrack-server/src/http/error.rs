//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use tasktrack_core::CoreError;

use crate::http::responses::ErrorBody;

/// Client-facing API errors.
///
/// Every error is detected at the handler boundary and translated
/// directly into a response status; nothing is retried and nothing
/// crashes the process.
#[derive(Debug)]
pub enum ApiError {
    /// The requested task does not exist. Surfaced as 404 with the
    /// fixed detail message the reference clients match on.
    NotFound,

    /// The request body failed the minimal shape constraints.
    /// Surfaced as 422 before any store mutation.
    Validation(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::TaskNotFound(_) => Self::NotFound,
            CoreError::InvalidInput(reason) => Self::Validation(reason),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            Self::Validation(reason) => (StatusCode::UNPROCESSABLE_ENTITY, reason),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
