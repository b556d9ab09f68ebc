//! HTTP request handlers for the task API.
//!
//! Handlers are kept thin: they translate wire payloads into service
//! requests, delegate, and map the outcome to a status code and JSON
//! body. All policy (validation order, identifier handling, partial
//! update semantics) lives in the service and domain layers.

use crate::http::dto::{CreateTaskRequest, HealthResponse, TaskResponse, UpdateTaskRequest};
use crate::http::error::{ApiErrorResponse, MSG_ENDPOINT_NOT_FOUND};
use crate::task::ports::TaskRepository;
use crate::task::services::TaskRecordService;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mockable::Clock;
use std::sync::Arc;

/// Shared handle to the task record service, cloned per request.
pub type SharedTaskService<R, C> = Arc<TaskRecordService<R, C>>;

/// `GET /api/tasks` — lists all task records, newest first.
///
/// # Errors
///
/// Responds 500 when the store is unreachable.
pub async fn list_tasks<R, C>(
    State(service): State<SharedTaskService<R, C>>,
) -> Result<Json<Vec<TaskResponse>>, ApiErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = service.list().await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `GET /api/tasks/{id}` — fetches a single task record.
///
/// # Errors
///
/// Responds 400 for a malformed identifier, 404 when no record matches,
/// and 500 on store failure.
pub async fn get_task<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, ApiErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = service.get(&id).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// `POST /api/tasks` — creates a task record.
///
/// Responds 201 with the full stored record, including the assigned
/// identifier and creation timestamp.
///
/// # Errors
///
/// Responds 400 when the title is missing or empty after trimming, and
/// 500 on store failure.
pub async fn create_task<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = service.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// `PUT /api/tasks/{id}` — partially updates a task record.
///
/// Omitted fields are preserved; the response reflects the post-update
/// record read back from the store.
///
/// # Errors
///
/// Responds 400 for a malformed identifier or an empty supplied title,
/// 404 when no record matches, and 500 on store failure.
pub async fn update_task<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = service.update(&id, body.into()).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// `DELETE /api/tasks/{id}` — deletes a task record.
///
/// Responds 204 with no body on success.
///
/// # Errors
///
/// Responds 400 for a malformed identifier, 404 when no record matches,
/// and 500 on store failure.
pub async fn delete_task<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health` (and `/healthz`) — liveness probe.
///
/// Always responds 200; the `db` field reports store connectivity
/// truthfully.
pub async fn health_check<R, C>(State(service): State<SharedTaskService<R, C>>) -> Json<HealthResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    Json(HealthResponse::from(service.store_health().await))
}

/// Fallback for unmatched routes: 404 with a JSON error body.
#[expect(clippy::unused_async, reason = "axum fallback handlers must be async")]
pub async fn endpoint_not_found() -> ApiErrorResponse {
    ApiErrorResponse::not_found(MSG_ENDPOINT_NOT_FOUND)
}
