//! Thread-safe in-memory task repository for tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Implements the same contract as the `PostgreSQL` adapter, including
/// newest-first listing and preserve-on-omit partial updates.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    /// Monotonic insertion counter, used to break creation-timestamp ties.
    next_seq: u64,
    tasks: HashMap<TaskId, StoredTask>,
}

#[derive(Debug, Clone)]
struct StoredTask {
    seq: u64,
    task: Task,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        let seq = state.next_seq;
        state.next_seq += 1;
        state.tasks.insert(
            task.id(),
            StoredTask {
                seq,
                task: task.clone(),
            },
        );
        Ok(())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut stored: Vec<&StoredTask> = state.tasks.values().collect();
        stored.sort_by(|left, right| {
            right
                .task
                .created_at()
                .cmp(&left.task.created_at())
                .then(right.seq.cmp(&left.seq))
        });
        Ok(stored.into_iter().map(|entry| entry.task.clone()).collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).map(|entry| entry.task.clone()))
    }

    async fn update_by_id(
        &self,
        id: TaskId,
        patch: &TaskPatch,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(entry) = state.tasks.get_mut(&id) else {
            return Ok(None);
        };
        entry.task.apply_patch(patch);
        Ok(Some(entry.task.clone()))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        Ok(state.tasks.remove(&id).is_some())
    }

    async fn ping(&self) -> TaskRepositoryResult<()> {
        Ok(())
    }
}
