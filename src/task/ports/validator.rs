//! Validator port for boundary task payloads.
//!
//! The task service accepts only payloads that already passed validation;
//! the boundary layer runs a [`TaskValidator`] before calling it.

use crate::task::domain::{TaskDto, TaskValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, TaskValidationError>;

/// Port for task payload validation.
///
/// Implementations should collect every violation before returning rather
/// than stopping at the first one, and must be stateless.
pub trait TaskValidator: Send + Sync {
    /// Validates a create or update payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] listing every rejected field.
    fn validate(&self, dto: &TaskDto) -> ValidationResult<()>;
}
