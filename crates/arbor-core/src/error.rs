//! Error types for the task tracker library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TaskStatus;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// Requested status change is not allowed from the current status
    #[error("{reason}")]
    InvalidTransition {
        from: TaskStatus,
        to: TaskStatus,
        reason: String,
    },
    /// Task cannot be completed while direct subtasks are still open
    #[error("Task {id} has incomplete subtasks: {}", format_ids(.subtask_ids))]
    IncompleteSubtasks { id: u64, subtask_ids: Vec<u64> },
    /// Task cannot be deleted while it still has subtasks
    #[error("Task {id} has subtasks and cannot be deleted")]
    HasSubtasks { id: u64 },
    /// Change would leave an open task below a completed parent
    #[error("Parent task {parent_id} is completed; only completed tasks can sit under it")]
    ParentCompleted { parent_id: u64 },
    /// Change would make a task its own ancestor
    #[error("Task {parent_id} cannot become the parent of task {id}: it would create a cycle")]
    HierarchyCycle { id: u64, parent_id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn format_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        TrackerError::Database {
            message: self.message,
            source,
        }
    }
}

impl TrackerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error belongs to the validation family.
    ///
    /// Validation errors are the ones a caller is expected to turn into a
    /// `success: false` response for the end user. Everything else (missing
    /// records aside) is an infrastructure failure for the current request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransition { .. }
                | Self::IncompleteSubtasks { .. }
                | Self::HasSubtasks { .. }
                | Self::ParentCompleted { .. }
                | Self::HierarchyCycle { .. }
                | Self::InvalidInput { .. }
        )
    }

    /// Whether this error reports a missing task.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
