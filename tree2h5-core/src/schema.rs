//! Declarative schemas for the exported simulation trees.
//!
//! The per-tree field lists are expressed once as a table consumed by both
//! the HDF5 layout creation and the export copy, so the two sides can never
//! drift apart.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Source element type of a branch.
///
/// Every field is exported as f64; the source type only controls how the
/// branch is decoded before the widening copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ColumnType {
    /// 64-bit floating point branch.
    F64,
    /// 32-bit signed integer branch, widened to f64 on export.
    I32,
}

/// One named scalar branch within a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FieldDef {
    /// Branch name, also the output dataset name.
    pub name: &'static str,
    /// Source element type.
    pub ty: ColumnType,
}

impl FieldDef {
    /// Creates a field definition.
    #[must_use]
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self { name, ty }
    }
}

/// Ordered field set of one named tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TreeSchema {
    /// Tree name, also the output group name.
    pub name: &'static str,
    /// Fields in branch order.
    pub fields: &'static [FieldDef],
}

impl TreeSchema {
    /// Number of fields.
    #[must_use]
    pub const fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field names in branch order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

const PRIMARIES_FIELDS: &[FieldDef] = &[
    FieldDef::new("E", ColumnType::F64),
    FieldDef::new("x", ColumnType::F64),
    FieldDef::new("y", ColumnType::F64),
    FieldDef::new("z", ColumnType::F64),
    FieldDef::new("theta", ColumnType::F64),
    FieldDef::new("phi", ColumnType::F64),
];

const HITS_FIELDS: &[FieldDef] = &[
    FieldDef::new("evid", ColumnType::I32),
    FieldDef::new("x", ColumnType::F64),
    FieldDef::new("y", ColumnType::F64),
    FieldDef::new("z", ColumnType::F64),
    FieldDef::new("vtxx", ColumnType::F64),
    FieldDef::new("vtxy", ColumnType::F64),
    FieldDef::new("vtxz", ColumnType::F64),
    FieldDef::new("edep", ColumnType::F64),
    FieldDef::new("energy", ColumnType::F64),
    FieldDef::new("pdg", ColumnType::I32),
    FieldDef::new("detid", ColumnType::I32),
];

const BDX_FIELDS: &[FieldDef] = &[
    FieldDef::new("eventid", ColumnType::I32),
    FieldDef::new("detid", ColumnType::I32),
    FieldDef::new("pdg", ColumnType::I32),
    FieldDef::new("procid", ColumnType::I32),
    FieldDef::new("x", ColumnType::F64),
    FieldDef::new("y", ColumnType::F64),
    FieldDef::new("z", ColumnType::F64),
    FieldDef::new("vtxx", ColumnType::F64),
    FieldDef::new("vtxy", ColumnType::F64),
    FieldDef::new("vtxz", ColumnType::F64),
    FieldDef::new("px", ColumnType::F64),
    FieldDef::new("py", ColumnType::F64),
    FieldDef::new("pz", ColumnType::F64),
    FieldDef::new("energy", ColumnType::F64),
    FieldDef::new("theta", ColumnType::F64),
    FieldDef::new("fluence", ColumnType::F64),
];

/// Primary-particle tree: generator-level kinematics.
pub const PRIMARIES: TreeSchema = TreeSchema {
    name: "Primaries",
    fields: PRIMARIES_FIELDS,
};

/// Sensitive-detector hit tree.
pub const HITS: TreeSchema = TreeSchema {
    name: "Hits",
    fields: HITS_FIELDS,
};

/// Boundary-crossing tree.
pub const BDX: TreeSchema = TreeSchema {
    name: "Bdx",
    fields: BDX_FIELDS,
};

/// The exported trees, in export order.
pub const EXPORT_TREES: [TreeSchema; 3] = [PRIMARIES, HITS, BDX];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_order_is_fixed() {
        let names: Vec<&str> = EXPORT_TREES.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Primaries", "Hits", "Bdx"]);
    }

    #[test]
    fn test_field_counts() {
        assert_eq!(PRIMARIES.field_count(), 6);
        assert_eq!(HITS.field_count(), 11);
        assert_eq!(BDX.field_count(), 16);
    }

    #[test]
    fn test_field_order_preserved() {
        let names: Vec<&str> = PRIMARIES.field_names().collect();
        assert_eq!(names, vec!["E", "x", "y", "z", "theta", "phi"]);

        let names: Vec<&str> = BDX.field_names().collect();
        assert_eq!(names[..4], ["eventid", "detid", "pdg", "procid"]);
        assert_eq!(names[13..], ["energy", "theta", "fluence"]);
    }

    #[test]
    fn test_integer_sourced_fields() {
        let int_fields: Vec<&str> = HITS
            .fields
            .iter()
            .filter(|f| f.ty == ColumnType::I32)
            .map(|f| f.name)
            .collect();
        assert_eq!(int_fields, vec!["evid", "pdg", "detid"]);

        let int_fields: Vec<&str> = BDX
            .fields
            .iter()
            .filter(|f| f.ty == ColumnType::I32)
            .map(|f| f.name)
            .collect();
        assert_eq!(int_fields, vec!["eventid", "detid", "pdg", "procid"]);

        assert!(PRIMARIES.fields.iter().all(|f| f.ty == ColumnType::F64));
    }

    #[test]
    fn test_no_duplicate_field_names() {
        for tree in &EXPORT_TREES {
            let mut names: Vec<&str> = tree.field_names().collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), tree.field_count(), "tree {}", tree.name);
        }
    }
}
