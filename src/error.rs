//! Error types for the structure converter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Document-level failures.
///
/// These are fatal for the document being converted. Malformed entries
/// *inside* an otherwise readable document never produce a `ConvertError`;
/// they are reported through [`Diagnostics`](crate::Diagnostics) while
/// conversion continues.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured input path is neither a file nor a directory.
    #[error("input path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),
}
