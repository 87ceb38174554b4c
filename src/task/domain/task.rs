//! Task entity, boundary representation, and lookup keys.

use super::TaskId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-field lookup key supported by task stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    /// Exact match on the task title.
    Title,
    /// Exact match on the free-form status token.
    Status,
}

impl TaskField {
    /// Returns the canonical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted task entity.
///
/// `status` is free-form text: values such as `OPEN`, `NEW`, or
/// `IN_PROGRESS` are conventions of callers, not a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: Option<TaskId>,
    title: String,
    description: String,
    status: String,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status token.
    pub status: String,
}

impl Task {
    /// Creates a task that has not been persisted yet.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            status: status.into(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: Some(data.id),
            title: data.title,
            description: data.description,
            status: data.status,
        }
    }

    /// Returns the store-assigned identifier, if the task has been saved.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status token.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the value of a lookup field.
    #[must_use]
    pub fn field(&self, field: TaskField) -> &str {
        match field {
            TaskField::Title => &self.title,
            TaskField::Status => &self.status,
        }
    }

    /// Returns the task with a store-assigned identifier.
    ///
    /// Only unsaved tasks receive the identifier; a task that already has
    /// one keeps it.
    #[must_use]
    pub(crate) fn assign_id(mut self, id: TaskId) -> Self {
        if self.id.is_none() {
            self.id = Some(id);
        }
        self
    }

    /// Overwrites title, description, and status from a boundary payload.
    ///
    /// The identifier is left untouched.
    pub fn replace_details(&mut self, dto: TaskDto) {
        let TaskDto {
            title,
            description,
            status,
        } = dto;
        self.title = title;
        self.description = description;
        self.status = status;
    }
}

/// Boundary-facing task representation.
///
/// Carries no identifier and has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskDto {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Free-form status token.
    pub status: String,
}

impl TaskDto {
    /// Creates a payload from its three fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: status.into(),
        }
    }
}
