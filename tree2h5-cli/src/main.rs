//!
//! This binary exports ROOT TTree simulation output to a flat HDF5 file.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;
use tree2h5_io::{convert_file_list, ProgressEvent};

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export error: {0}")]
    Export(#[from] tree2h5_io::Error),
}

/// ROOT TTree to HDF5 exporter for simulation output.
///
/// Reads a text file listing source ROOT files (one path per line),
/// concatenates the Primaries, Hits, and Bdx trees across them, and writes
/// one fixed-length f64 dataset per branch into `<list stem>.h5`.
#[derive(Parser)]
#[command(name = "tree2h5")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file listing source ROOT files, one path per line
    file_list: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{}", cli.file_list.display());

    let summary = convert_file_list(&cli.file_list, |event| match *event {
        ProgressEvent::ChainOpened { tree, entries } => {
            println!("Nentries in {tree}: {entries}");
        }
        ProgressEvent::LayoutCreated { tree, fields } => {
            println!("Group /{tree} created with {fields} datasets.");
        }
        ProgressEvent::Exported {
            tree,
            processed,
            total,
        } => {
            println!("Processed {processed} entries of {total} in {tree}...");
        }
    })?;

    println!("Finished compiling {}. Closing...", summary.output.display());
    Ok(())
}
