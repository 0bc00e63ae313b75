//! Core value types for components, assemblies, and derived annotations.
//!
//! - [`component::Component`]: one accession + stoichiometry pair
//! - [`assembly::Assembly`]: an ordered component list with wire round-trip
//! - [`types`]: the enumerated annotation results
//!
//! The comma/underscore grammar is the wire format shared with the calling
//! pipeline; the raw-string helpers in [`assembly`] keep its exact
//! semantics, while the structured types are the parse-once boundary form.

pub mod assembly;
pub mod component;
pub mod types;
