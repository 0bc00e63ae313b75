use crate::core::types::RibosomeClass;
use crate::patterns::RIBOSOME_RFAM_MAPPING;

/// First ribosome class (in declaration order) whose both required Rfam
/// family ids occur as substrings of the assembly string.
///
/// The table order is the ambiguity resolution: bacterial, then
/// eukaryotic, then archaeal.
#[must_use]
pub fn check_complete_ribosome(assembly: &str) -> Option<RibosomeClass> {
    RIBOSOME_RFAM_MAPPING
        .iter()
        .find(|(_, families)| families.iter().all(|family| assembly.contains(family)))
        .map(|(class, _)| *class)
}
