//! Application services for task record orchestration.

mod records;

pub use records::{
    CreateTaskRequest, StoreHealth, TaskRecordService, TaskServiceError, TaskServiceResult,
    UpdateTaskRequest,
};
