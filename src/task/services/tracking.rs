//! Service layer for task lookup, creation, update, deletion, and listing.
//!
//! Every operation is a single request against the repository with no state
//! retained between calls. Not-found outcomes are reported as
//! [`TaskServiceError::NotFound`]; repository failures pass through unchanged
//! as [`TaskServiceError::Repository`].

use crate::task::{
    domain::{Task, TaskDto, TaskField, TaskId, mapper},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Key of a lookup that found no task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskLookup {
    /// Lookup by identifier.
    Id(TaskId),
    /// Lookup by a single field value.
    Field {
        /// Field that was matched.
        field: TaskField,
        /// Value that matched nothing.
        value: String,
    },
}

impl fmt::Display for TaskLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Field { field, value } => write!(f, "{field} '{value}'"),
        }
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task matched the lookup.
    #[error("task not found by {0}")]
    NotFound(TaskLookup),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    /// Reports whether the error is a not-found outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Payloads handed to [`create_task`](Self::create_task) and
/// [`update_task`](Self::update_task) must already have passed boundary
/// validation.
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    async fn find_by_field_or_error(
        &self,
        field: TaskField,
        value: &str,
    ) -> TaskServiceResult<Task> {
        self.repository
            .find_by_field(field, value)
            .await?
            .ok_or_else(|| {
                TaskServiceError::NotFound(TaskLookup::Field {
                    field,
                    value: value.to_owned(),
                })
            })
    }

    /// Returns the task with the exact title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the title, or
    /// [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_task_by_title(&self, title: &str) -> TaskServiceResult<TaskDto> {
        debug!(title, "looking up task by title");
        let task = self.find_by_field_or_error(TaskField::Title, title).await?;
        Ok(mapper::to_dto(&task))
    }

    /// Returns the first task, in store order, with the exact status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the status, or
    /// [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_task_by_status(&self, status: &str) -> TaskServiceResult<TaskDto> {
        debug!(status, "looking up task by status");
        let task = self.find_by_field_or_error(TaskField::Status, status).await?;
        Ok(mapper::to_dto(&task))
    }

    /// Persists a new task built from the payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] with the store's error when
    /// persistence fails, for example on a duplicate title.
    pub async fn create_task(&self, dto: TaskDto) -> TaskServiceResult<TaskDto> {
        debug!(title = %dto.title, "creating task");
        let saved = self.repository.save(mapper::to_entity(dto)).await?;
        Ok(mapper::to_dto(&saved))
    }

    /// Replaces title, description, and status of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] without writing when the task
    /// does not exist, or [`TaskServiceError::Repository`] when lookup or
    /// persistence fails.
    pub async fn update_task(&self, id: TaskId, dto: TaskDto) -> TaskServiceResult<TaskDto> {
        debug!(task_id = %id, "updating task");
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(TaskLookup::Id(id)))?;
        task.replace_details(dto);
        let saved = self.repository.save(task).await?;
        Ok(mapper::to_dto(&saved))
    }

    /// Deletes an existing task.
    ///
    /// Existence is checked first so a missing task is reported as
    /// not-found and no delete reaches the repository.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Repository`] when the check or delete fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        debug!(task_id = %id, "deleting task");
        if !self.repository.exists_by_id(id).await? {
            return Err(TaskServiceError::NotFound(TaskLookup::Id(id)));
        }
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    /// Returns every task in store order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn get_all_tasks(&self) -> TaskServiceResult<Vec<TaskDto>> {
        debug!("listing tasks");
        let tasks = self.repository.find_all().await?;
        Ok(tasks.iter().map(mapper::to_dto).collect())
    }
}
