use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::component::{Component, ParseError};
use crate::core::types::AssemblyType;

/// A biological assembly: an ordered list of components
///
/// Order is significant only insofar as it stays index-aligned with any
/// parallel per-component string (e.g. symmetry operators); it is never a
/// sort key. Repeated components are legal and meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assembly {
    pub components: Vec<Component>,
}

impl Assembly {
    #[must_use]
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Parse a comma-separated assembly string into structured components.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::EmptyAssembly` for an empty string, or the
    /// component-level error for the first malformed identifier.
    pub fn parse(assembly: &str) -> Result<Self, ParseError> {
        if assembly.is_empty() {
            return Err(ParseError::EmptyAssembly);
        }
        let components = assembly
            .split(',')
            .map(Component::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(components))
    }

    #[must_use]
    pub fn assembly_type(&self) -> AssemblyType {
        if self.components.len() > 1 {
            AssemblyType::Heteromeric
        } else if self.components.first().is_some_and(|c| c.stoichiometry == 1) {
            AssemblyType::Monomeric
        } else {
            AssemblyType::Homomeric
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl std::fmt::Display for Assembly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .components
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{joined}")
    }
}

/// Oligomeric state of a raw assembly string.
///
/// Works on the wire form directly so that identifiers with extra
/// underscores (e.g. PDB-derived `1abc_1_2` tokens) keep their historical
/// behavior: the stoichiometry is the text after the last underscore, and a
/// token without any underscore counts as non-monomeric.
#[must_use]
pub fn assembly_type(assembly: &str) -> AssemblyType {
    if assembly.contains(',') {
        return AssemblyType::Heteromeric;
    }
    match assembly.rsplit_once('_') {
        Some((_, "1")) => AssemblyType::Monomeric,
        _ => AssemblyType::Homomeric,
    }
}

/// Number of comma-separated components in an assembly string
#[must_use]
pub fn component_count(assembly: &str) -> usize {
    assembly.split(',').count()
}

/// Distinct PDB identifiers referenced by an assembly string.
///
/// The PDB identifier is the substring before the FIRST underscore of each
/// component; components may carry further underscore-delimited fields.
#[must_use]
pub fn pdb_identifier_set(assembly: &str) -> HashSet<&str> {
    assembly
        .split(',')
        .filter_map(|component| component.split('_').next())
        .collect()
}

/// Count of unique PDB entries referenced by an assembly string
#[must_use]
pub fn count_unique_pdb(assembly: &str) -> usize {
    pdb_identifier_set(assembly).len()
}
