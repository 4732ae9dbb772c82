//! Error types for the board engine

use crate::types::{Column, ColumnId, TaskId};
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task not found (missing from the task map or from the expected
    /// column's membership list)
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Column is at capacity and cannot accept another task
    #[error("column '{id}' is full ({max} tasks max)")]
    ColumnFull { id: String, max: usize },

    /// A task with this id already exists on the board
    #[error("duplicate task ID: {id}")]
    DuplicateTask { id: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a task-not-found error
    pub fn task_not_found(id: &TaskId) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }

    /// Create a column-not-found error
    pub fn column_not_found(id: &ColumnId) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// Create a column-full error for the given column
    pub fn column_full(column: &Column) -> Self {
        Self::ColumnFull {
            id: column.id.to_string(),
            max: column.max_tasks.unwrap_or(column.task_ids.len()),
        }
    }

    /// Create a duplicate-task error
    pub fn duplicate_task(id: &TaskId) -> Self {
        Self::DuplicateTask { id: id.to_string() }
    }

    /// Whether this is a capacity rejection, the one error class that
    /// is surfaced to the user rather than swallowed as a no-op
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::ColumnFull { .. })
    }
}
