//! The annotation engine: pure classification and aggregation functions
//! over the assembly string grammar.
//!
//! - [`composition`]: protein/RNA/DNA predicates and quantified accession checks
//! - [`symmetry`]: operator pairing, consensus, and variant detection
//! - [`ribosome`]: completeness against the fixed Rfam pair table
//! - [`species`] / [`methods`]: table-backed majority vote and method labels
//! - [`grouping`] / [`diff`]: accession grouping, adjacency maps, map diffs
//!
//! Every function here is a single-pass transform with no state between
//! calls; the only process-lifetime state is the read-only
//! [`crate::tables::ReferenceTables`] passed in by reference. All inputs
//! are borrowed immutably, so the whole module is safe to call from
//! multiple threads once the tables are built.

pub mod composition;
pub mod diff;
pub mod grouping;
pub mod methods;
pub mod ribosome;
pub mod species;
pub mod symmetry;

pub use composition::{
    assembly_composition, contains_dna, contains_protein, contains_rna, validate_rfam,
    validate_unmapped, validate_uniprot,
};
pub use diff::{compare_maps, MapDiff};
pub use grouping::{group_bidirectional, group_by_accession, OrderedCounter};
pub use methods::experimental_methods;
pub use ribosome::check_complete_ribosome;
pub use species::species_name;
pub use symmetry::{
    asymmetrical_assemblies, consistent_symmetry, count_unique_symmetry,
    extended_symmetry_operators, most_frequent_symmetry, symmetry_operators, symmetry_variants,
    unique_symmetries,
};
