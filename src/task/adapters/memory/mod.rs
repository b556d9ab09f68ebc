//! In-memory adapter for task record persistence.

mod task;

pub use task::InMemoryTaskRepository;
