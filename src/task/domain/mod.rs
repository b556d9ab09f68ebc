//! Domain model for task records.
//!
//! The task domain models validated record creation, partial patching,
//! and reconstruction from persistence while keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{NewTask, PersistedTaskData, Task, TaskPatch};
