//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskField, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Keyed task store contract.
///
/// Each call is expected to be atomic on its own; callers perform no
/// cross-call coordination.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Finds the first task whose `field` equals `value` exactly.
    ///
    /// When several tasks match, the first in store order is returned.
    /// Returns `None` when nothing matches.
    async fn find_by_field(
        &self,
        field: TaskField,
        value: &str,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Reports whether a task with the identifier exists.
    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Persists a task and returns the stored record.
    ///
    /// A task without an identifier is inserted and receives a fresh one; a
    /// task with an identifier replaces the stored record in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTitle`] when another task
    /// already uses the title, or [`TaskRepositoryError::NotFound`] when an
    /// identified task is no longer stored.
    async fn save(&self, task: Task) -> TaskRepositoryResult<Task>;

    /// Deletes the task with the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns every stored task in store iteration order.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Another task already uses the title.
    #[error("duplicate task title: {0}")]
    DuplicateTitle(String),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

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
