//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services and
//! by the boundary layer that feeds them.

pub mod repository;
pub mod validator;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use validator::{TaskValidator, ValidationResult};

#[cfg(test)]
pub use repository::MockTaskRepository;
