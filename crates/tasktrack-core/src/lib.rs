//! TaskTrack Core Domain Types
//!
//! This crate contains the pure task domain with no dependencies on:
//! - Network/HTTP
//! - Database
//! - Runtime specifics
//!
//! All types here represent the core business domain of TaskTrack:
//! the Task record, its creation/patch shapes, and the in-memory store
//! that owns the records and allocates identifiers.

pub mod error;
pub mod ids;
pub mod store;
pub mod task;

// Re-export commonly used types
pub use error::CoreError;
pub use ids::TaskId;
pub use store::TaskStore;
pub use task::{NewTask, Task, TaskPatch};
