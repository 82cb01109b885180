//! Error types for the board core

use std::path::PathBuf;
use thiserror::Error;

/// Result type for fallible board I/O and configuration
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised by persistence and configuration.
///
/// Transitions never return these; see [`Rejected`] for why a transition was a no-op.
#[derive(Debug, Error)]
pub enum BoardError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be extracted
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Persisted board breaks a structural invariant
    #[error("invalid board at {path}: {violation}")]
    Invariant {
        path: PathBuf,
        violation: InvariantViolation,
    },

    /// The storage slot refused the write
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },
}

impl BoardError {
    /// Create an unavailable-storage error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for BoardError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Why a transition left the board unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    /// Required text was empty after trimming
    #[error("{field} cannot be empty")]
    EmptyText { field: &'static str },

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Task exists but is not held by the named column
    #[error("task '{task}' is not in column '{column}'")]
    TaskNotInColumn { task: String, column: String },

    /// The transition would reproduce the current board
    #[error("no change")]
    NoChange,
}

impl Rejected {
    /// Create an empty-text rejection
    pub fn empty(field: &'static str) -> Self {
        Self::EmptyText { field }
    }

    /// Create a task-not-found rejection
    pub fn task_not_found(id: impl ToString) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }

    /// Create a column-not-found rejection
    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// Create a task-not-in-column rejection
    pub fn not_in_column(task: impl ToString, column: impl ToString) -> Self {
        Self::TaskNotInColumn {
            task: task.to_string(),
            column: column.to_string(),
        }
    }
}

/// A structural invariant of the normalized board that does not hold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("column '{column}' references missing task '{task}'")]
    DanglingTask { column: String, task: String },

    #[error("column order references missing column '{column}'")]
    DanglingColumn { column: String },

    #[error("column '{column}' is missing from the column order")]
    OrphanColumn { column: String },

    #[error("column '{column}' appears more than once in the column order")]
    DuplicateColumn { column: String },

    #[error("task '{task}' is referenced more than once")]
    DuplicateTask { task: String },

    #[error("task '{task}' is not held by any column")]
    UnplacedTask { task: String },

    #[error("{kind} stored under key '{key}' has id '{id}'")]
    KeyMismatch {
        kind: &'static str,
        key: String,
        id: String,
    },
}
