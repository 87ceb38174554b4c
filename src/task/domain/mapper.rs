//! Conversion between [`Task`] entities and [`TaskDto`] payloads.
//!
//! Both directions copy fields one-to-one and never fail. The entity
//! identifier is dropped on the way out and is unset on the way in, so a
//! `Task -> TaskDto -> Task` round trip cannot restore identity.

use super::{Task, TaskDto};

/// Maps a task to its boundary representation.
#[must_use]
pub fn to_dto(task: &Task) -> TaskDto {
    TaskDto {
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        status: task.status().to_owned(),
    }
}

/// Maps a boundary payload to an unsaved task.
#[must_use]
pub fn to_entity(dto: TaskDto) -> Task {
    let TaskDto {
        title,
        description,
        status,
    } = dto;
    Task::new(title, description, status)
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        to_dto(task)
    }
}

impl From<TaskDto> for Task {
    fn from(dto: TaskDto) -> Self {
        to_entity(dto)
    }
}
