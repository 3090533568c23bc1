//! In-memory task store.

use chrono::Utc;

use crate::{CoreError, NewTask, Task, TaskId, TaskPatch};

/// Owns the authoritative ordered collection of Tasks and allocates
/// identifiers.
///
/// Iteration order is insertion order; removals do not reorder the
/// remaining entries. Identifiers start at 1, increase strictly, and
/// are never reused after a removal. The store is volatile: a fresh
/// store is empty with the counter back at 1.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store with the identifier counter at 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// All tasks in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a task by id.
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True if the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Insert a new task: allocate the next identifier, stamp
    /// `created_at`, append, and return the stored record.
    pub fn insert(&mut self, new: NewTask) -> Result<Task, CoreError> {
        if new.title.trim().is_empty() {
            return Err(CoreError::InvalidInput("title must not be empty".into()));
        }

        let task = Task {
            id: TaskId::new(self.next_id),
            title: new.title,
            description: new.description,
            completed: new.completed,
            due_date: new.due_date,
            priority: new.priority,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Apply a partial update to the task with the given id.
    ///
    /// Fields absent from the patch are left unchanged. Explicit null
    /// clears `description`, `due_date`, and `priority`; explicit null
    /// for `title` or `completed` is invalid input and leaves the task
    /// untouched. `id` and `created_at` are never overwritten.
    pub fn replace(&mut self, id: TaskId, patch: TaskPatch) -> Result<Task, CoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(CoreError::TaskNotFound(id))?;

        // Validate the whole patch before touching the record.
        let title = match patch.title {
            Some(Some(title)) => {
                if title.trim().is_empty() {
                    return Err(CoreError::InvalidInput("title must not be empty".into()));
                }
                Some(title)
            }
            Some(None) => {
                return Err(CoreError::InvalidInput("title must not be null".into()));
            }
            None => None,
        };
        let completed = match patch.completed {
            Some(Some(completed)) => Some(completed),
            Some(None) => {
                return Err(CoreError::InvalidInput("completed must not be null".into()));
            }
            None => None,
        };

        let task = &mut self.tasks[index];
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(completed) = completed {
            task.completed = completed;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }

        Ok(task.clone())
    }

    /// Remove the task with the given id.
    pub fn remove(&mut self, id: TaskId) -> Result<(), CoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(CoreError::TaskNotFound(id))?;
        self.tasks.remove(index);
        Ok(())
    }
}
