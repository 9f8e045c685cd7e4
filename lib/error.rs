//! Error types for pjv.

use thiserror::Error;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Result type for pjv operations.
pub type PjvResult<T> = Result<T, PjvError>;

/// Error type for pjv operations.
///
/// Validation problems are not errors; they are reported in a
/// [`ValidationOutput`](crate::ValidationOutput).
#[derive(Debug, Error)]
pub enum PjvError {
    /// The manifest file to validate does not exist.
    #[error("File does not exist: {0}")]
    FileNotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
