//! Error types for task operations.
//!
//! Every failure a task operation can produce falls into one of three kinds:
//! invalid input, a reference to a task that does not exist, or a failure in
//! the storage layer itself. All of them are terminal for the CLI invocation
//! that triggered them; the process exits non-zero and the user re-invokes.

use thiserror::Error;

/// Classified failure of a task operation.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Input violates a field constraint. No write occurs.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The referenced task id does not exist. No write occurs.
    #[error("task '{0}' not found")]
    NotFound(String),

    /// The underlying database rejected the operation or is unreachable.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl TaskError {
    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
