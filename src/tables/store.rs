use std::collections::HashMap;

use crate::core::types::ExperimentalMethod;

/// Symmetry sentinel used when an identifier has no recorded operator
pub const NO_SYMMETRY: &str = "no-sym";

/// The three read-only reference tables, built once at startup and passed
/// by reference into every lookup-using function.
///
/// Construction happens before any classification call; after that the
/// tables are never mutated, so shared references are safe across threads.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    /// Symmetry operator keyed by component identifier
    symmetry: HashMap<String, String>,

    /// Experimental method keyed by PDB identifier
    methods: HashMap<String, ExperimentalMethod>,

    /// Binomial species name keyed by accession
    species: HashMap<String, String>,
}

impl ReferenceTables {
    #[must_use]
    pub fn new(
        symmetry: HashMap<String, String>,
        methods: HashMap<String, ExperimentalMethod>,
        species: HashMap<String, String>,
    ) -> Self {
        Self {
            symmetry,
            methods,
            species,
        }
    }

    /// Symmetry operator for an identifier, `"no-sym"` when absent
    #[must_use]
    pub fn symmetry_operator(&self, identifier: &str) -> &str {
        self.symmetry
            .get(identifier)
            .map_or(NO_SYMMETRY, String::as_str)
    }

    /// Experimental method for a PDB identifier, absent on a table miss
    #[must_use]
    pub fn experimental_method(&self, identifier: &str) -> Option<ExperimentalMethod> {
        self.methods.get(identifier).copied()
    }

    /// Species name for an accession, absent on a table miss
    #[must_use]
    pub fn species_name(&self, accession: &str) -> Option<&str> {
        self.species.get(accession).map(String::as_str)
    }

    /// Total number of entries across the three tables
    #[must_use]
    pub fn len(&self) -> usize {
        self.symmetry.len() + self.methods.len() + self.species.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symmetry.is_empty() && self.methods.is_empty() && self.species.is_empty()
    }
}

/// Builder for assembling the tables from whatever sources the caller has
#[derive(Debug, Default)]
pub struct ReferenceTablesBuilder {
    tables: ReferenceTables,
}

impl ReferenceTablesBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_symmetry(mut self, entries: HashMap<String, String>) -> Self {
        self.tables.symmetry = entries;
        self
    }

    #[must_use]
    pub fn with_methods(mut self, entries: HashMap<String, ExperimentalMethod>) -> Self {
        self.tables.methods = entries;
        self
    }

    #[must_use]
    pub fn with_species(mut self, entries: HashMap<String, String>) -> Self {
        self.tables.species = entries;
        self
    }

    #[must_use]
    pub fn build(self) -> ReferenceTables {
        self.tables
    }
}
