//! Shared application state.

use std::sync::Arc;

use tokio::sync::RwLock;

use tasktrack_core::TaskStore;

/// Shared application state.
///
/// The store and its identifier counter are guarded as one unit so
/// concurrent inserts never allocate the same identifier and updates
/// and removals on the same task never interleave partially.
pub struct AppState {
    /// The task store: ordered records plus the identifier counter.
    pub store: RwLock<TaskStore>,
}

impl AppState {
    /// Create a new AppState with an empty store, wrapped in Arc.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            store: RwLock::new(TaskStore::new()),
        })
    }

    /// Get the number of tasks.
    pub async fn task_count(&self) -> usize {
        self.store.read().await.len()
    }
}
