//! HDF5-side layout creation and positioned column writes.

use crate::Result;
use hdf5::{Dataset, File, Group};
use ndarray::{s, ArrayView1};
use std::path::Path;
use tree2h5_core::TreeSchema;

/// The created group and per-field datasets of one exported tree.
///
/// Datasets are fixed-shape f64, one per schema field, all sized to the
/// tree's total entry count, so index `i` in every dataset refers to the
/// same logical source entry.
pub struct Hdf5TreeLayout {
    group: Group,
    datasets: Vec<Dataset>,
}

impl Hdf5TreeLayout {
    /// Creates the group and one fixed-length f64 dataset per schema field.
    ///
    /// # Errors
    /// Returns an error if the file is not writable or a group of this name
    /// already exists.
    pub fn create(file: &File, schema: &TreeSchema, entries: usize) -> Result<Self> {
        let group = file.create_group(schema.name)?;

        let mut datasets = Vec::with_capacity(schema.field_count());
        for field in schema.fields {
            let dataset = group
                .new_dataset::<f64>()
                .shape((entries,))
                .create(field.name)?;
            datasets.push(dataset);
        }

        Ok(Self { group, datasets })
    }

    /// Absolute group name, e.g. `/Primaries`.
    #[must_use]
    pub fn name(&self) -> String {
        self.group.name()
    }

    /// Number of datasets.
    #[must_use]
    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    /// Writes one decoded column block at entry offset `start`, one column
    /// per dataset in schema order.
    ///
    /// # Errors
    /// Returns an error if a slice write fails (an oversized block surfaces
    /// as an out-of-bounds HDF5 selection).
    pub fn write_block(&self, start: usize, columns: &[Vec<f64>]) -> Result<()> {
        for (dataset, column) in self.datasets.iter().zip(columns) {
            write_slice_at(dataset, start, column)?;
        }
        Ok(())
    }
}

fn write_slice_at(dataset: &Dataset, start: usize, data: &[f64]) -> Result<()> {
    if data.is_empty() {
        return Ok(());
    }
    let end = start + data.len();
    dataset.write_slice(ArrayView1::from(data), s![start..end])?;
    Ok(())
}

/// Reads one exported dataset back as a vector.
///
/// # Errors
/// Returns an error if the file, group, or dataset cannot be opened.
pub fn read_field_values<P: AsRef<Path>>(path: P, tree: &str, field: &str) -> Result<Vec<f64>> {
    let file = File::open(path)?;
    let dataset = file.group(tree)?.dataset(field)?;
    Ok(dataset.read_raw::<f64>()?)
}
