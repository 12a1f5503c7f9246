//! tree2h5-io: ROOT-to-HDF5 conversion I/O for tree2h5.
//!
//! Reading side: multi-file tree chains decoded one source file at a time.
//! Writing side: fixed-shape HDF5 layouts written block-by-block at entry
//! offsets. The `pipeline` module ties both ends together.
//!

pub mod chain;
mod error;
pub mod pipeline;
pub mod root;
pub mod writer;

pub use chain::TreeChain;
pub use error::{Error, Result};
pub use pipeline::{convert_file_list, ExportSummary, ProgressEvent, TreeSummary};
pub use root::ColumnBlock;
pub use writer::{read_field_values, Hdf5TreeLayout};
