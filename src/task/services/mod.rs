//! Application services for task orchestration.

mod tracking;

pub use tracking::{TaskLookup, TaskService, TaskServiceError, TaskServiceResult};
