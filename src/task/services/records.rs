//! Service layer for task record operations.
//!
//! Orchestrates the five record operations plus the store liveness
//! probe. Client-supplied identifiers are parsed here, before any
//! repository call, so malformed input is rejected uniformly as
//! [`TaskServiceError::InvalidIdentifier`] rather than surfacing as a
//! missing record or a store failure.

use crate::task::{
    domain::{NewTask, ParseTaskIdError, Task, TaskDomainError, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates a request from raw optional fields as received on the wire.
    #[must_use]
    pub const fn from_parts(
        title: Option<String>,
        description: Option<String>,
        completed: Option<bool>,
    ) -> Self {
        Self {
            title,
            description,
            completed,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Request payload for partially updating a task record.
///
/// Fields left unset are preserved on the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// Creates an empty request updating nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a request from raw optional fields as received on the wire.
    #[must_use]
    pub const fn from_parts(
        title: Option<String>,
        description: Option<String>,
        completed: Option<bool>,
    ) -> Self {
        Self {
            title,
            description,
            completed,
        }
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Store connectivity as observed by the liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreHealth {
    /// The store answered the probe.
    Connected,
    /// The store did not answer the probe.
    Disconnected,
}

impl StoreHealth {
    /// Returns the wire representation of the health state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }

    /// Returns `true` when the store answered the probe.
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Service-level errors for task record operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// The client-supplied identifier is not syntactically valid.
    #[error("malformed task identifier: {0}")]
    InvalidIdentifier(String),
    /// No record matches the well-formed identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Store(#[from] TaskRepositoryError),
}

/// Result type for task record service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task record orchestration service.
///
/// Stateless between requests; holds only shared handles to the
/// repository and clock, so it can be cloned freely across concurrent
/// request handlers.
#[derive(Clone)]
pub struct TaskRecordService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskRecordService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task record service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns all task records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store is unreachable.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Retrieves a single task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidIdentifier`] for malformed
    /// identifiers and [`TaskServiceError::NotFound`] when no record
    /// matches.
    pub async fn get(&self, id: &str) -> TaskServiceResult<Task> {
        let task_id = parse_id(id)?;
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))
    }

    /// Creates a task record and returns the full stored record.
    ///
    /// Assigns the identifier and creation timestamp; a client-supplied
    /// identifier is never accepted on create.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is missing
    /// or empty after trimming; nothing is persisted in that case.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let draft = NewTask::new(
            request.title.unwrap_or_default(),
            request.description,
            request.completed,
        )?;
        let task = Task::create(draft, &*self.clock);
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Applies a partial update and returns the post-update record as
    /// read back from the store.
    ///
    /// Omitted fields are preserved; identifier and creation timestamp
    /// are never altered. An update supplying no fields returns the
    /// record unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidIdentifier`] for malformed
    /// identifiers, [`TaskServiceError::Validation`] when a supplied
    /// title is empty after trimming, and [`TaskServiceError::NotFound`]
    /// when no record matches.
    pub async fn update(&self, id: &str, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let task_id = parse_id(id)?;
        let patch = TaskPatch::new(request.title, request.description, request.completed)?;
        self.repository
            .update_by_id(task_id, &patch)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))
    }

    /// Deletes a task record; its identifier is permanently invalid for
    /// lookup afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidIdentifier`] for malformed
    /// identifiers and [`TaskServiceError::NotFound`] when no record
    /// matches.
    pub async fn delete(&self, id: &str) -> TaskServiceResult<()> {
        let task_id = parse_id(id)?;
        if self.repository.delete_by_id(task_id).await? {
            Ok(())
        } else {
            Err(TaskServiceError::NotFound(task_id))
        }
    }

    /// Probes store connectivity for the liveness endpoint.
    ///
    /// Never fails; an unreachable store is reported as
    /// [`StoreHealth::Disconnected`].
    pub async fn store_health(&self) -> StoreHealth {
        match self.repository.ping().await {
            Ok(()) => StoreHealth::Connected,
            Err(error) => {
                tracing::warn!(%error, "store liveness probe failed");
                StoreHealth::Disconnected
            }
        }
    }
}

fn parse_id(raw: &str) -> Result<TaskId, TaskServiceError> {
    TaskId::parse(raw).map_err(|ParseTaskIdError(value)| TaskServiceError::InvalidIdentifier(value))
}
