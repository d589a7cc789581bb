//! Error types for srs
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::domain::TaskId;

/// All error types that can occur in srs
#[derive(Debug, Error)]
pub enum SrsError {
    /// Review/forget called with an index outside today's visible list
    #[error("No task at index {index} ({visible} visible)")]
    SessionIndexOutOfRange { index: usize, visible: usize },

    /// Task id not present in the store
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    /// The id counter cannot advance without reusing an id
    #[error("Task ids exhausted at {0}")]
    IdsExhausted(TaskId),

    /// Persisted store exists but cannot be parsed
    #[error("Store malformed: {0}")]
    StoreMalformed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SrsError {
    /// Whether the failure leaves the session usable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SrsError::SessionIndexOutOfRange { .. } | SrsError::TaskNotFound(_))
    }
}

/// Result type alias for srs operations
pub type Result<T> = std::result::Result<T, SrsError>;
