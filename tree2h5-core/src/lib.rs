//! tree2h5-core: Schemas and input handling for the tree exporter.
//!
//! This crate provides the declarative tree schemas and the file-list
//! plumbing shared by the conversion pipeline and the CLI.
//!

pub mod error;
pub mod filelist;
pub mod schema;

pub use error::{Error, Result};
pub use filelist::{derive_output_path, read_file_list};
pub use schema::{ColumnType, FieldDef, TreeSchema, EXPORT_TREES};
