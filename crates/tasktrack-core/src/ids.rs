//! Newtype wrappers for identifiers to ensure type safety.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a Task.
///
/// Identifiers are allocated by the store, strictly increasing from 1,
/// and never reused. A newtype over `u64` serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u64);

impl TaskId {
    /// Create a TaskId from a raw integer.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner integer value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = TaskId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_id_serializes_as_bare_integer() {
        let id = TaskId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
