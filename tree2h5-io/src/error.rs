//! I/O error types.

use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error.
    #[error("core error: {0}")]
    Core(#[from] tree2h5_core::Error),

    /// HDF5 library error.
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// ROOT-side library error.
    #[error("ROOT error: {0}")]
    Root(String),

    /// A decoded column's length differs from the tree's entry count.
    #[error("column mismatch in '{tree}/{field}': expected {expected} entries, decoded {actual}")]
    ColumnMismatch {
        tree: String,
        field: String,
        expected: usize,
        actual: usize,
    },

    /// A tree's entry count changed between scan and export.
    #[error("entry count mismatch in '{tree}': scanned {expected}, decoded {actual}")]
    EntryCountMismatch {
        tree: String,
        expected: usize,
        actual: usize,
    },
}
