//! Core domain errors.

use crate::TaskId;
use thiserror::Error;

/// Core domain errors for TaskTrack.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Task not found.
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
