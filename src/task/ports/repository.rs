//! Repository port for task record persistence and lookup.

use crate::task::domain::{Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations receive only well-formed identifiers; malformed
/// client input is rejected by the service layer before any store call,
/// so a missing record is always reported as `Ok(None)` or `Ok(false)`,
/// never conflated with an identifier-format failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns all task records, newest first by creation timestamp.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Applies a partial update and returns the post-update record as
    /// read back from the store.
    ///
    /// Fields absent from the patch are preserved. An empty patch is a
    /// read-only no-op. Returns `None` when the record does not exist.
    async fn update_by_id(&self, id: TaskId, patch: &TaskPatch)
    -> TaskRepositoryResult<Option<Task>>;

    /// Deletes a task record.
    ///
    /// Returns `false` when no record matched the identifier.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Probes store connectivity for the liveness endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskRepositoryError`] when the store is unreachable.
    async fn ping(&self) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The store call exceeded its time bound.
    #[error("store call exceeded {0:?}")]
    Timeout(Duration),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
