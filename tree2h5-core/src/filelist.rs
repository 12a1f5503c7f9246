//! Input file-list handling.

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a file list: one source path per line.
///
/// Lines are whitespace-trimmed and empty lines are skipped, so a trailing
/// newline at the end of the list does not register a phantom source file.
///
/// # Errors
/// Returns an error if the list file cannot be read.
pub fn read_file_list(path: &Path) -> Result<Vec<PathBuf>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Derives the output container path from the file-list path.
///
/// Only the final dot-suffix of the file name is replaced by `.h5`:
/// `run1.txt` becomes `run1.h5`, `data.sim.lst` becomes `data.sim.h5`, and
/// a dotless name gets `.h5` appended. A name that is nothing but a
/// suffix (`.lst`) collapses to `.h5`.
///
/// # Errors
/// Returns an error if the path has no UTF-8 file name.
pub fn derive_output_path(list_path: &Path) -> Result<PathBuf> {
    let name = list_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidListPath(list_path.display().to_string()))?;

    let stem = match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    };

    Ok(list_path.with_file_name(format!("{stem}.h5")))
}
