//! Task CRUD handlers.
//!
//! Each handler is a thin adapter from an HTTP request to one
//! `TaskStore` operation. Reads take the store's read guard, mutations
//! the write guard. Body decode failures surface as 422 before the
//! store is touched.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};

use tasktrack_core::{NewTask, Task, TaskId, TaskPatch};

use crate::http::error::ApiError;
use crate::state::AppState;

/// `GET /tasks` - list every task in insertion order.
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<Vec<Task>> {
    let store = state.store.read().await;
    Json(store.all().to_vec())
}

/// `GET /tasks/:id` - fetch a single task.
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, ApiError> {
    let store = state.store.read().await;
    let task = store.find(TaskId::new(id)).ok_or(ApiError::NotFound)?;
    Ok(Json(task.clone()))
}

/// `POST /tasks` - create a task from the supplied fields.
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(new) = payload.map_err(reject_body)?;

    let mut store = state.store.write().await;
    let task = store.insert(new)?;
    info!(task_id = %task.id, title = %task.title, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/:id` - apply a partial update.
///
/// Fields absent from the body are left unchanged; explicit null
/// clears the nullable fields.
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(patch) = payload.map_err(reject_body)?;

    let mut store = state.store.write().await;
    let task = store.replace(TaskId::new(id), patch)?;
    info!(task_id = %task.id, "Task updated");

    Ok(Json(task))
}

/// `DELETE /tasks/:id` - remove a task.
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    store.remove(TaskId::new(id))?;
    info!(task_id = id, "Task deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    warn!(error = %rejection.body_text(), "Rejected request body");
    ApiError::Validation(rejection.body_text())
}
