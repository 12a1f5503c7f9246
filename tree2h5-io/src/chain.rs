//! Multi-file concatenation of one named tree.

use crate::root::{self, ColumnBlock};
use crate::{Error, Result};
use std::path::PathBuf;
use tree2h5_core::TreeSchema;

/// The ordered multi-file concatenation of one named tree.
///
/// Opening a chain scans every listed file once for the tree's entry count.
/// Blocks are decoded lazily, one source file at a time, in list order, so
/// peak memory is bounded by the largest single file.
#[derive(Debug, Clone)]
pub struct TreeChain {
    schema: TreeSchema,
    files: Vec<PathBuf>,
    entries_per_file: Vec<usize>,
    total_entries: usize,
}

impl TreeChain {
    /// Opens the chain: registers every file and scans its entry count.
    ///
    /// An empty file list is valid and yields a chain with zero entries.
    ///
    /// # Errors
    /// Returns an error if any listed file cannot be opened or lacks the
    /// named tree.
    pub fn open(schema: TreeSchema, files: &[PathBuf]) -> Result<Self> {
        let mut entries_per_file = Vec::with_capacity(files.len());
        let mut total_entries = 0usize;

        for path in files {
            let entries = root::tree_entries(path, schema.name)?;
            entries_per_file.push(entries);
            total_entries += entries;
        }

        Ok(Self {
            schema,
            files: files.to_vec(),
            entries_per_file,
            total_entries,
        })
    }

    /// Tree name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.schema.name
    }

    /// Schema backing this chain.
    #[must_use]
    pub const fn schema(&self) -> &TreeSchema {
        &self.schema
    }

    /// Total entries across all files.
    #[must_use]
    pub const fn entries(&self) -> usize {
        self.total_entries
    }

    /// Number of source files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Decodes the columns of the `index`-th source file.
    ///
    /// The decoded block must match the entry count recorded when the chain
    /// was opened; a shorter or longer block would shift the positional
    /// mapping of every later block.
    ///
    /// # Errors
    /// Returns an error on any read failure, or [`Error::EntryCountMismatch`]
    /// if the file's tree changed size since the chain was opened.
    ///
    /// # Panics
    /// Panics if `index` is out of range for the chain's file list.
    pub fn read_block(&self, index: usize) -> Result<ColumnBlock> {
        let block = root::read_columns(&self.files[index], &self.schema)?;
        let expected = self.entries_per_file[index];
        if block.entries != expected {
            return Err(Error::EntryCountMismatch {
                tree: self.schema.name.to_string(),
                expected,
                actual: block.entries,
            });
        }
        Ok(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree2h5_core::schema::PRIMARIES;

    #[test]
    fn test_empty_chain() {
        let chain = TreeChain::open(PRIMARIES, &[]).unwrap();
        assert_eq!(chain.entries(), 0);
        assert_eq!(chain.file_count(), 0);
        assert_eq!(chain.name(), "Primaries");
    }

    #[test]
    fn test_missing_file_fails_on_open() {
        let files = vec![PathBuf::from("/no/such/run.root")];
        let err = TreeChain::open(PRIMARIES, &files).unwrap_err();
        assert!(matches!(err, Error::Root(_)));
    }
}
