//! Task aggregate root and record construction types.

use super::{TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Validated draft for a task record awaiting persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: String,
    completed: bool,
}

impl NewTask {
    /// Creates a validated draft from client-supplied fields.
    ///
    /// `description` defaults to the empty string and `completed` to
    /// `false` when absent; both text fields are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        completed: Option<bool>,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
            description: description
                .map(|value| value.trim().to_owned())
                .unwrap_or_default(),
            completed: completed.unwrap_or(false),
        })
    }
}

/// Partial update to an existing task record.
///
/// Fields left as `None` are preserved on the stored record. The record
/// identifier and creation timestamp are never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    description: Option<String>,
    completed: Option<bool>,
}

impl TaskPatch {
    /// Creates a validated patch from client-supplied optional fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when a title is supplied
    /// but empty after trimming.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        completed: Option<bool>,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: title.map(TaskTitle::new).transpose()?,
            description: description.map(|value| value.trim().to_owned()),
            completed,
        })
    }

    /// Returns the replacement title, if supplied.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the replacement description, if supplied.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement completion flag, if supplied.
    #[must_use]
    pub const fn completed(&self) -> Option<bool> {
        self.completed
    }

    /// Returns `true` when no field is supplied.
    ///
    /// An empty patch leaves the stored record untouched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task record from a validated draft.
    ///
    /// Assigns a fresh identifier and takes the creation timestamp from
    /// the injected clock; both are immutable thereafter.
    #[must_use]
    pub fn create(draft: NewTask, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            completed: data.completed,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a patch, overwriting only the fields it supplies.
    ///
    /// Identifier and creation timestamp are never altered.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(title) = patch.title() {
            self.title = title.clone();
        }
        if let Some(description) = patch.description() {
            self.description = description.to_owned();
        }
        if let Some(completed) = patch.completed() {
            self.completed = completed;
        }
    }
}
