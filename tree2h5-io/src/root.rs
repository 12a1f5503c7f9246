//! ROOT-side boundary: single-file tree access.
//!
//! All oxyroot types stay inside this module; its errors are stringified
//! here so the rest of the crate only sees [`crate::Error`].

use crate::{Error, Result};
use oxyroot::{ReaderTree, RootFile};
use std::fmt::Display;
use std::path::Path;
use tree2h5_core::{ColumnType, FieldDef, TreeSchema};

/// One source file's decoded columns for a single tree, in schema order.
#[derive(Debug, Clone)]
pub struct ColumnBlock {
    /// Entry count of this file's tree.
    pub entries: usize,
    /// One f64 column per schema field, each of length `entries`.
    pub columns: Vec<Vec<f64>>,
}

/// Queries the entry count of a named tree in one source file.
///
/// # Errors
/// Returns an error if the file cannot be opened or has no tree of that
/// name.
pub fn tree_entries(path: &Path, tree_name: &str) -> Result<usize> {
    let mut file = open(path)?;
    let tree = get_tree(&mut file, path, tree_name)?;
    entry_count(&tree, path, tree_name)
}

/// Decodes every schema column of a named tree in one source file.
///
/// Integer branches are decoded at their source width and widened with
/// `f64::from`, so the copy into the output container is exact.
///
/// # Errors
/// Returns an error if the file cannot be opened, the tree or a branch is
/// missing, a branch has an unexpected element type, or a decoded column's
/// length disagrees with the tree's entry count.
pub fn read_columns(path: &Path, schema: &TreeSchema) -> Result<ColumnBlock> {
    let mut file = open(path)?;
    let tree = get_tree(&mut file, path, schema.name)?;
    let entries = entry_count(&tree, path, schema.name)?;

    let mut columns = Vec::with_capacity(schema.field_count());
    for field in schema.fields {
        let column = read_column(&tree, path, schema.name, field)?;
        if column.len() != entries {
            return Err(Error::ColumnMismatch {
                tree: schema.name.to_string(),
                field: field.name.to_string(),
                expected: entries,
                actual: column.len(),
            });
        }
        columns.push(column);
    }

    Ok(ColumnBlock { entries, columns })
}

fn open(path: &Path) -> Result<RootFile> {
    RootFile::open(path).map_err(|e| Error::Root(format!("{}: {e}", path.display())))
}

fn get_tree(file: &mut RootFile, path: &Path, name: &str) -> Result<ReaderTree> {
    file.get_tree(name)
        .map_err(|e| Error::Root(format!("{}: tree '{name}': {e}", path.display())))
}

fn entry_count(tree: &ReaderTree, path: &Path, name: &str) -> Result<usize> {
    usize::try_from(tree.entries()).map_err(|_| {
        Error::Root(format!(
            "{}: tree '{name}' reports a negative entry count",
            path.display()
        ))
    })
}

fn read_column(
    tree: &ReaderTree,
    path: &Path,
    tree_name: &str,
    field: &FieldDef,
) -> Result<Vec<f64>> {
    let branch = tree.branch(field.name).ok_or_else(|| {
        Error::Root(format!(
            "{}: tree '{tree_name}' has no branch '{}'",
            path.display(),
            field.name
        ))
    })?;

    let column = match field.ty {
        ColumnType::F64 => branch
            .as_iter::<f64>()
            .map_err(|e| branch_error(path, tree_name, field.name, &e))?
            .collect(),
        ColumnType::I32 => branch
            .as_iter::<i32>()
            .map_err(|e| branch_error(path, tree_name, field.name, &e))?
            .map(f64::from)
            .collect(),
    };
    Ok(column)
}

fn branch_error(path: &Path, tree: &str, branch: &str, err: &impl Display) -> Error {
    Error::Root(format!(
        "{}: branch '{tree}/{branch}': {err}",
        path.display()
    ))
}
