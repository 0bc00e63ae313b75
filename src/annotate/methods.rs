use std::collections::BTreeSet;

use crate::core::assembly::pdb_identifier_set;
use crate::tables::store::ReferenceTables;

/// Comma-joined, alphabetically sorted experimental-method labels for the
/// distinct PDB entries an assembly references.
///
/// Duplicate methods across entries collapse into one label; table misses
/// contribute nothing.
#[must_use]
pub fn experimental_methods(assembly: &str, tables: &ReferenceTables) -> String {
    let labels: BTreeSet<&str> = pdb_identifier_set(assembly)
        .into_iter()
        .filter_map(|pdb_id| tables.experimental_method(pdb_id))
        .map(|method| method.label())
        .collect();

    labels.into_iter().collect::<Vec<_>>().join(",")
}
