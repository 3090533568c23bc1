//! HTTP response types.
//!
//! The Task wire representation is `tasktrack_core::Task` itself:
//! optional fields serialize as explicit `null` when unset.

use serde::Serialize;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub detail: String,
}

/// Response for the root liveness/info route.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Service name.
    pub message: &'static str,

    /// Crate version.
    pub version: &'static str,
}
