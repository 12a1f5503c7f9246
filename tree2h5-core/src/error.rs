//! Error types for tree2h5-core.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File-list path has no usable file name.
    #[error("invalid file-list path: {0}")]
    InvalidListPath(String),
}
