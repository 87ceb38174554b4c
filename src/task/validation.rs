//! Boundary validation for task payloads.
//!
//! Each rule is a pure function over a single field. The default validator
//! runs every rule and reports all violations together, in the field order
//! `title`, `description`, `status`.

use crate::task::{
    domain::{FieldViolation, TaskDto, TaskDtoField, TaskValidationError},
    ports::{TaskValidator, ValidationResult},
};

/// Default implementation of the task payload validator.
///
/// # Examples
///
/// ```
/// use tasktrack::task::domain::{TaskDto, TaskDtoField};
/// use tasktrack::task::ports::TaskValidator;
/// use tasktrack::task::validation::DefaultTaskValidator;
///
/// let validator = DefaultTaskValidator::new();
/// assert!(validator.validate(&TaskDto::new("Jira1", "JiraCodeTask1", "OPEN")).is_ok());
///
/// let err = validator
///     .validate(&TaskDto::new("", "JiraCodeTask1", "OPEN"))
///     .expect_err("blank title is rejected");
/// assert_eq!(err.message_for(TaskDtoField::Title), Some("Title is required"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTaskValidator;

impl DefaultTaskValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TaskValidator for DefaultTaskValidator {
    fn validate(&self, dto: &TaskDto) -> ValidationResult<()> {
        let violations: Vec<FieldViolation> = [
            validate_required(TaskDtoField::Title, &dto.title),
            validate_required(TaskDtoField::Description, &dto.description),
            validate_required(TaskDtoField::Status, &dto.status),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(TaskValidationError::new(violations))
        }
    }
}

/// Rejects blank values for a required field.
///
/// # Errors
///
/// Returns a [`FieldViolation`] when `value` is empty after trimming.
pub fn validate_required(field: TaskDtoField, value: &str) -> Result<(), FieldViolation> {
    if value.trim().is_empty() {
        return Err(FieldViolation::required(field));
    }
    Ok(())
}
