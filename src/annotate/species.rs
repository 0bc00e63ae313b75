use crate::annotate::grouping::OrderedCounter;
use crate::tables::store::ReferenceTables;

/// Majority-vote species name for an assembly.
///
/// Each component is stripped to its leading accession (text before the
/// first underscore) and looked up in the species table. Table misses are
/// excluded BEFORE the vote so an absent value can never out-vote a real
/// one. Ties resolve to the first-seen species.
#[must_use]
pub fn species_name<'t>(assembly: &str, tables: &'t ReferenceTables) -> Option<&'t str> {
    assembly
        .split(',')
        .filter_map(|component| component.split('_').next())
        .filter_map(|accession| tables.species_name(accession))
        .collect::<OrderedCounter<'t>>()
        .most_frequent()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::tables::ReferenceTablesBuilder;

    fn species_tables(entries: &[(&str, &str)]) -> ReferenceTables {
        let species: HashMap<String, String> = entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ReferenceTablesBuilder::new().with_species(species).build()
    }

    #[test]
    fn test_majority_vote() {
        let tables = species_tables(&[
            ("P1", "Homo sapiens"),
            ("P2", "Homo sapiens"),
            ("P3", "Mus musculus"),
        ]);
        assert_eq!(
            species_name("P1_1,P2_2,P3_1", &tables),
            Some("Homo sapiens")
        );
    }

    #[test]
    fn test_absent_values_do_not_vote() {
        // Two unmapped components against one mapped: the real value wins
        let tables = species_tables(&[("P1", "Homo sapiens")]);
        assert_eq!(
            species_name("P1_1,Q8_1,Q9_2", &tables),
            Some("Homo sapiens")
        );
    }

    #[test]
    fn test_tie_breaks_first_seen() {
        let tables = species_tables(&[("P1", "Mus musculus"), ("P2", "Homo sapiens")]);
        assert_eq!(species_name("P1_1,P2_1", &tables), Some("Mus musculus"));
    }

    #[test]
    fn test_no_mapped_species_is_none() {
        let tables = species_tables(&[("P1", "Homo sapiens")]);
        assert_eq!(species_name("Q8_1,Q9_2", &tables), None);
    }
}
