//! End-to-end conversion pipeline.
//!
//! One call converts a file list into a flat HDF5 container: derive the
//! output path, create the container (overwriting any previous file), open
//! the three tree chains, then export each tree in fixed order. Reporting
//! crosses this boundary as [`ProgressEvent`]s so the binary owns all
//! console output.

use crate::chain::TreeChain;
use crate::writer::Hdf5TreeLayout;
use crate::Result;
use hdf5::File;
use std::path::{Path, PathBuf};
use tree2h5_core::{derive_output_path, read_file_list, EXPORT_TREES};

/// Interval between export progress notices, in entries.
const PROGRESS_INTERVAL: usize = 1000;

/// Progress events emitted during a conversion.
///
/// Informational only; the conversion behaves identically whatever the
/// observer does with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A tree chain was opened and its total entry count is known.
    ChainOpened {
        tree: &'static str,
        entries: usize,
    },
    /// A group and its datasets were created in the output container.
    LayoutCreated {
        tree: &'static str,
        fields: usize,
    },
    /// A 1000-entry boundary was reached while exporting `tree`.
    Exported {
        tree: &'static str,
        processed: usize,
        total: usize,
    },
}

/// Per-tree conversion result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeSummary {
    /// Tree (and group) name.
    pub tree: &'static str,
    /// Entries exported.
    pub entries: usize,
}

/// Conversion result summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Path of the written container.
    pub output: PathBuf,
    /// Per-tree entry counts, in export order.
    pub trees: Vec<TreeSummary>,
}

/// Converts every tree listed in `EXPORT_TREES` from the sources named in
/// the file list into `<list stem>.h5`.
///
/// The output container is created fresh before any source is opened and
/// closed exactly once when the last tree has been exported. Any failure
/// propagates immediately; a partially written container is left behind
/// as-is.
///
/// # Errors
/// Returns an error if the list cannot be read, the container cannot be
/// created, a source file is missing a tree or branch, or any read or
/// write fails.
pub fn convert_file_list<F>(list_path: &Path, mut on_event: F) -> Result<ExportSummary>
where
    F: FnMut(&ProgressEvent),
{
    let output = derive_output_path(list_path)?;
    let file = File::create(&output)?;
    let files = read_file_list(list_path)?;

    let mut chains = Vec::with_capacity(EXPORT_TREES.len());
    for schema in &EXPORT_TREES {
        let chain = TreeChain::open(*schema, &files)?;
        on_event(&ProgressEvent::ChainOpened {
            tree: chain.name(),
            entries: chain.entries(),
        });
        chains.push(chain);
    }

    let mut trees = Vec::with_capacity(chains.len());
    for chain in &chains {
        let layout = Hdf5TreeLayout::create(&file, chain.schema(), chain.entries())?;
        on_event(&ProgressEvent::LayoutCreated {
            tree: chain.name(),
            fields: chain.schema().field_count(),
        });

        export_chain(&layout, chain, &mut on_event)?;
        trees.push(TreeSummary {
            tree: chain.name(),
            entries: chain.entries(),
        });
    }

    drop(file);
    Ok(ExportSummary { output, trees })
}

/// Copies every block of the chain into the layout, in file-list order.
///
/// Entry `i` of every column lands at dataset index `i`; a progress event
/// fires at each `PROGRESS_INTERVAL` boundary a block crosses, matching
/// the cadence of an entry-by-entry copy.
fn export_chain<F>(layout: &Hdf5TreeLayout, chain: &TreeChain, on_event: &mut F) -> Result<()>
where
    F: FnMut(&ProgressEvent),
{
    let total = chain.entries();
    let mut cursor = 0usize;

    for index in 0..chain.file_count() {
        let block = chain.read_block(index)?;
        layout.write_block(cursor, &block.columns)?;

        let next = cursor + block.entries;
        let mut boundary = cursor.div_ceil(PROGRESS_INTERVAL) * PROGRESS_INTERVAL;
        while boundary < next {
            on_event(&ProgressEvent::Exported {
                tree: chain.name(),
                processed: boundary,
                total,
            });
            boundary += PROGRESS_INTERVAL;
        }
        cursor = next;
    }

    Ok(())
}
