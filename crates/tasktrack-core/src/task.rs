//! Task record and its creation/patch shapes.

use crate::TaskId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A Task is the single managed entity: a to-do item with an
/// immutable identifier and creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier, assigned by the store at creation.
    pub id: TaskId,

    /// Short human-readable title. Always non-empty.
    pub title: String,

    /// Optional longer description.
    pub description: Option<String>,

    /// Whether the task is done. Defaults to false.
    pub completed: bool,

    /// Optional calendar due date (no time-of-day).
    pub due_date: Option<NaiveDate>,

    /// Optional free-form priority label. No enumeration is enforced.
    pub priority: Option<String>,

    /// When the task was created. Never changes afterwards.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied to create a Task. `title` is required; everything
/// else falls back to its default.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub priority: Option<String>,
}

/// Partial update for a Task.
///
/// Every field is a double option so the decoding layer can tell
/// "field omitted" (outer `None`) apart from "field present with null"
/// (`Some(None)`). Omitted fields are left unchanged; explicit null
/// clears the nullable fields and is rejected for `title`/`completed`.
/// `id` and `created_at` are not patchable and have no field here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub completed: Option<Option<bool>>,

    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "double_option")]
    pub priority: Option<Option<String>>,
}

impl TaskPatch {
    /// True if no field is present at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
    }
}

/// Wraps the field value in an outer `Some` whenever the field is
/// present in the input, so `#[serde(default)]` (outer `None`) only
/// kicks in when the field is truly absent.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_distinguishes_omitted_from_null() {
        let patch: TaskPatch = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.title, None);
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_patch_present_value() {
        let patch: TaskPatch =
            serde_json::from_str(r#"{"title": "new", "completed": true}"#).unwrap();
        assert_eq!(patch.title, Some(Some("new".to_string())));
        assert_eq!(patch.completed, Some(Some(true)));
        assert_eq!(patch.due_date, None);
    }

    #[test]
    fn test_empty_patch() {
        let patch: TaskPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_new_task_defaults() {
        let new: NewTask = serde_json::from_str(r#"{"title": "Buy milk"}"#).unwrap();
        assert_eq!(new.title, "Buy milk");
        assert_eq!(new.description, None);
        assert!(!new.completed);
        assert_eq!(new.due_date, None);
        assert_eq!(new.priority, None);
    }

    #[test]
    fn test_new_task_requires_title() {
        let result: Result<NewTask, _> = serde_json::from_str(r#"{"completed": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_due_date_wire_format() {
        let new: NewTask =
            serde_json::from_str(r#"{"title": "t", "due_date": "2026-09-01"}"#).unwrap();
        assert_eq!(
            new.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );
    }
}
