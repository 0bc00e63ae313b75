//! # assembly-annotator
//!
//! A library for annotating macromolecular assembly records from compact
//! delimited identifier strings.
//!
//! Structural-biology pipelines describe an assembly as a comma-separated
//! list of `<Accession>_<Stoichiometry>` components, e.g.
//! `"P12345_2,RF00177_1"`. This crate decodes that grammar and derives
//! semantic annotations: polymer composition (protein/RNA/DNA), oligomeric
//! type, symmetry consistency, ribosome completeness, dominant species,
//! and experimental method.
//!
//! ## Features
//!
//! - **Composition predicates**: independent protein/RNA/DNA checks with
//!   permissive substring matching of UniProt and Rfam accessions
//! - **Assembly typing**: monomeric / homomeric / heteromeric from the
//!   component list and stoichiometry
//! - **Symmetry aggregation**: pairing, filtering, consensus, and variant
//!   detection over positionally aligned operator strings
//! - **Reference lookups**: symmetry operators, species names, and
//!   experimental methods injected as immutable tables
//!
//! ## Example
//!
//! ```rust
//! use assembly_annotator::annotate::{self, composition};
//! use assembly_annotator::core::assembly;
//! use assembly_annotator::core::types::AssemblyType;
//!
//! let record = "P12345_2,RF00177_1";
//!
//! assert!(composition::contains_protein(record));
//! assert!(composition::contains_rna(record));
//! assert_eq!(assembly::assembly_type(record), AssemblyType::Heteromeric);
//! assert_eq!(annotate::check_complete_ribosome(record), None);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: structured component/assembly types and derived value enums
//! - [`patterns`]: compiled identifier patterns and the ribosome table
//! - [`tables`]: read-only reference tables and their CSV loader
//! - [`annotate`]: the classification and aggregation functions
//! - [`cli`]: command-line interface implementation

pub mod annotate;
pub mod cli;
pub mod core;
pub mod patterns;
pub mod tables;

// Re-export commonly used types for convenience
pub use crate::core::assembly::Assembly;
pub use crate::core::component::{Component, ParseError};
pub use crate::core::types::*;
pub use crate::tables::{ReferenceTables, ReferenceTablesBuilder};
