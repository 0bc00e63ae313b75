//! Polymer-composition predicates over whole assembly strings.
//!
//! The three `contains_*` predicates are independent and non-exclusive: a
//! hybrid assembly can be protein-like, RNA-like, and DNA-like at once.
//! They test the whole string, so a match anywhere in a multi-component
//! assembly is sufficient.

use crate::core::types::{ComponentClass, Quantifier};
use crate::patterns::{RFAM_PATTERN, UNIPROT_PATTERN};

/// Protein content: a UniProt accession anywhere in the string, or an
/// unmapped `Protein_` / `antibody_` marker.
#[must_use]
pub fn contains_protein(assembly: &str) -> bool {
    UNIPROT_PATTERN.is_match(assembly)
        || assembly.contains("Protein_")
        || assembly.contains("antibody_")
}

/// RNA content: an Rfam family id anywhere in the string, or an unmapped
/// `RNA_` marker.
#[must_use]
pub fn contains_rna(assembly: &str) -> bool {
    RFAM_PATTERN.is_match(assembly) || assembly.contains("RNA_")
}

/// DNA content: the literal substring `DNA` anywhere in the string.
///
/// This also fires for `DNA/RNA_` hybrid markers; those assemblies are
/// deliberately reported as both DNA-like and RNA-like.
#[must_use]
pub fn contains_dna(assembly: &str) -> bool {
    assembly.contains("DNA")
}

/// Comma-joined polymer composition label set (set union, no repeats,
/// order not guaranteed).
#[must_use]
pub fn assembly_composition(has_protein: bool, has_rna: bool, has_dna: bool) -> String {
    let mut composition = Vec::new();
    if has_protein {
        composition.push("protein");
    }
    if has_rna {
        composition.push("RNA");
    }
    if has_dna {
        composition.push("DNA");
    }
    composition.join(",")
}

/// Whether any/all components of an assembly match the UniProt pattern
#[must_use]
pub fn validate_uniprot(assembly: &str, quantifier: Quantifier) -> bool {
    quantifier.apply(
        assembly
            .split(',')
            .map(|component| UNIPROT_PATTERN.is_match(component)),
    )
}

/// Whether any/all components of an assembly match the Rfam pattern
#[must_use]
pub fn validate_rfam(assembly: &str, quantifier: Quantifier) -> bool {
    quantifier.apply(
        assembly
            .split(',')
            .map(|component| RFAM_PATTERN.is_match(component)),
    )
}

/// Whether EVERY component carries one of the class's unmapped prefix
/// markers. The ALL quantifier is hardwired here.
#[must_use]
pub fn validate_unmapped(assembly: &str, class: ComponentClass) -> bool {
    assembly.split(',').all(|component| {
        class
            .prefixes()
            .iter()
            .any(|prefix| component.starts_with(prefix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_protein() {
        assert!(contains_protein("P12345_2"));
        assert!(contains_protein("Protein_1"));
        assert!(contains_protein("antibody_2"));
        assert!(!contains_protein("RNA_1"));
    }

    #[test]
    fn test_contains_rna() {
        assert!(contains_rna("RF00177_1"));
        assert!(contains_rna("RNA_2"));
        assert!(!contains_rna("Protein_1"));
    }

    #[test]
    fn test_hybrid_marker_fires_both_nucleic_predicates() {
        // DNA/RNA_ markers report as DNA-like AND RNA-like
        assert!(contains_dna("DNA/RNA_1"));
        assert!(contains_rna("DNA/RNA_1"));
    }

    #[test]
    fn test_predicates_are_whole_string() {
        // A protein match anywhere in a multi-component string suffices
        assert!(contains_protein("RNA_1,P12345_2"));
    }

    #[test]
    fn test_assembly_composition_union() {
        assert_eq!(assembly_composition(true, false, false), "protein");
        assert_eq!(assembly_composition(false, false, false), "");

        let joined = assembly_composition(true, true, false);
        let labels: std::collections::HashSet<&str> = joined.split(',').collect();
        assert_eq!(labels, ["protein", "RNA"].into_iter().collect());
    }

    #[test]
    fn test_validate_uniprot_quantifiers() {
        let mixed = "P12345_2,RNA_1";
        assert!(validate_uniprot(mixed, Quantifier::Any));
        assert!(!validate_uniprot(mixed, Quantifier::All));
        assert!(validate_uniprot("P12345_2,Q67890_1", Quantifier::All));
    }

    #[test]
    fn test_validate_rfam_quantifiers() {
        let mixed = "RF00177_1,P12345_2";
        assert!(validate_rfam(mixed, Quantifier::Any));
        assert!(!validate_rfam(mixed, Quantifier::All));
    }

    #[test]
    fn test_validate_unmapped() {
        assert!(validate_unmapped("Protein_1,Protein_2", ComponentClass::Protein));
        assert!(!validate_unmapped("Protein_1,P12345_2", ComponentClass::Protein));
        assert!(validate_unmapped("RNA_1,DNA_2,DNA/RNA_1", ComponentClass::Na));
        assert!(validate_unmapped("Protein_1,antibody_2,DNA_1", ComponentClass::All));
        assert!(!validate_unmapped("antibody_2", ComponentClass::Protein));
    }
}
