//! Data transfer objects for the HTTP surface.
//!
//! DTOs are separate from domain types and define the JSON wire
//! contract. Unknown fields in request bodies are ignored, matching
//! serde's default behaviour; in particular a client-supplied `id` on
//! create is silently discarded.

use crate::task::domain::Task;
use crate::task::services::{self, StoreHealth};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/tasks`.
///
/// `title` is optional at the wire level so a missing title surfaces as
/// a validation failure (400) instead of a deserialisation rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title, required and non-empty after trimming.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional description, defaults to the empty string.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional initial completion flag, defaults to `false`.
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<CreateTaskRequest> for services::CreateTaskRequest {
    fn from(body: CreateTaskRequest) -> Self {
        Self::from_parts(body.title, body.description, body.completed)
    }
}

/// Request body for `PUT /api/tasks/{id}`.
///
/// All fields are optional; omitted fields are preserved on the stored
/// record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    /// Replacement title, non-empty after trimming when supplied.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement completion flag.
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<UpdateTaskRequest> for services::UpdateTaskRequest {
    fn from(body: UpdateTaskRequest) -> Self {
        Self::from_parts(body.title, body.description, body.completed)
    }
}

/// Response body for a task record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Opaque record identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            completed: task.completed(),
            created_at: task.created_at(),
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

/// Response body for the liveness endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status, always `"OK"`.
    pub status: &'static str,
    /// Store connectivity: `"connected"` or `"disconnected"`.
    pub db: &'static str,
}

impl From<StoreHealth> for HealthResponse {
    fn from(health: StoreHealth) -> Self {
        Self {
            status: "OK",
            db: health.as_str(),
        }
    }
}
