//! Compiled identifier patterns and the ribosome completeness table.
//!
//! Pattern tests are substring searches, not anchored matches: an accession
//! embedded in a larger composite token is a valid match. This permissive
//! behavior is part of the wire contract with the calling pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::RibosomeClass;

/// UniProt accession: two accepted shapes, with an optional version suffix.
pub static UNIPROT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-N,R-Z][0-9]([A-Z][A-Z, 0-9][A-Z, 0-9][0-9]){1,2})|([O,P,Q][0-9][A-Z, 0-9][A-Z, 0-9][A-Z, 0-9][0-9])(\.\d+)?",
    )
    .expect("UniProt pattern is valid")
});

/// Rfam family id: `RF` followed by exactly five digits.
pub static RFAM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"RF\d{5}").expect("Rfam pattern is valid"));

/// Ribosome classes and the pair of Rfam families both required for the
/// class to be declared complete. Iterated in declaration order; the first
/// match wins.
pub const RIBOSOME_RFAM_MAPPING: [(RibosomeClass, [&str; 2]); 3] = [
    (RibosomeClass::Bacterial, ["RF00177", "RF02541"]),
    (RibosomeClass::Eukaryotic, ["RF01960", "RF02543"]),
    (RibosomeClass::Archaeal, ["RF01989", "RF02540"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniprot_pattern_matches() {
        assert!(UNIPROT_PATTERN.is_match("P12345"));
        assert!(UNIPROT_PATTERN.is_match("Q9NQ94"));
        assert!(UNIPROT_PATTERN.is_match("A0A024R161"));
        // Versioned accession
        assert!(UNIPROT_PATTERN.is_match("P12345.2"));
    }

    #[test]
    fn test_uniprot_pattern_is_substring_search() {
        // Embedded in a composite token: still a match
        assert!(UNIPROT_PATTERN.is_match("P12345_2,RNA_1"));
    }

    #[test]
    fn test_rfam_pattern() {
        assert!(RFAM_PATTERN.is_match("RF00177"));
        assert!(RFAM_PATTERN.is_match("xxRF02541yy"));
        assert!(!RFAM_PATTERN.is_match("RF0017"));
    }
}
