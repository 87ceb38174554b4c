//! Validation error types for boundary task payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Field of a [`TaskDto`](super::TaskDto) payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskDtoField {
    /// The `title` field.
    Title,
    /// The `description` field.
    Description,
    /// The `status` field.
    Status,
}

impl TaskDtoField {
    /// Returns the field name as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
        }
    }

    /// Returns the message reported when the field is blank.
    #[must_use]
    pub const fn required_message(self) -> &'static str {
        match self {
            Self::Title => "Title is required",
            Self::Description => "Description is required",
            Self::Status => "Status is required",
        }
    }
}

impl fmt::Display for TaskDtoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field with its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field that failed validation.
    pub field: TaskDtoField,
    /// Human-readable reason.
    pub message: String,
}

impl FieldViolation {
    /// Creates the violation reported for a blank required field.
    #[must_use]
    pub fn required(field: TaskDtoField) -> Self {
        Self {
            field,
            message: field.required_message().to_owned(),
        }
    }
}

/// Errors returned when a task payload fails boundary validation.
///
/// All violations are collected; validation is not fail-fast.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("task payload is invalid: {}", summarise(.violations))]
pub struct TaskValidationError {
    violations: Vec<FieldViolation>,
}

impl TaskValidationError {
    /// Creates an error from collected violations.
    #[must_use]
    pub const fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Returns the collected violations in field order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns the message recorded for a field, if it was rejected.
    #[must_use]
    pub fn message_for(&self, field: TaskDtoField) -> Option<&str> {
        self.violations
            .iter()
            .find(|violation| violation.field == field)
            .map(|violation| violation.message.as_str())
    }

    /// Renders the violations as a `{field: message}` JSON object.
    #[must_use]
    pub fn to_json_body(&self) -> Value {
        let body: Map<String, Value> = self
            .violations
            .iter()
            .map(|violation| {
                (
                    violation.field.as_str().to_owned(),
                    Value::String(violation.message.clone()),
                )
            })
            .collect();
        Value::Object(body)
    }
}

fn summarise(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|violation| format!("{}: {}", violation.field, violation.message))
        .collect::<Vec<_>>()
        .join(", ")
}
