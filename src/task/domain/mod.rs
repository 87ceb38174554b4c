//! Domain model for task tracking.
//!
//! The persisted [`Task`] entity carries a store-assigned identifier while the
//! boundary-facing [`TaskDto`] never does. Conversion between the two lives in
//! [`mapper`] and is pure.

mod error;
mod ids;
pub mod mapper;
mod task;

pub use error::{FieldViolation, TaskDtoField, TaskValidationError};
pub use ids::TaskId;
pub use mapper::{to_dto, to_entity};
pub use task::{PersistedTaskData, Task, TaskDto, TaskField};
