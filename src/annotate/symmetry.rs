//! Symmetry-operator aggregation over positionally aligned strings.
//!
//! An assembly string and its symmetry-operator string are paired by
//! position. Pairing stops at the shorter sequence: trailing unmatched
//! items are dropped without warning. That truncation is existing wire
//! behavior and is kept as-is; the tests document it explicitly.

use std::collections::HashSet;

use tracing::warn;

use crate::annotate::grouping::OrderedCounter;
use crate::tables::store::{ReferenceTables, NO_SYMMETRY};

/// Pair each component with its operator as `<component>|<operator>`,
/// joined with `", "` for display.
#[must_use]
pub fn extended_symmetry_operators(assembly: &str, operators: &str) -> String {
    assembly
        .split(',')
        .zip(operators.split(','))
        .map(|(component, operator)| format!("{component}|{operator}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Components whose paired operator is the `"no-sym"` sentinel
#[must_use]
pub fn asymmetrical_assemblies(assembly: &str, operators: &str) -> String {
    assembly
        .split(',')
        .zip(operators.split(','))
        .filter(|(_, operator)| *operator == NO_SYMMETRY)
        .map(|(component, _)| component)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The operator with the highest occurrence count, first-seen among ties
#[must_use]
pub fn most_frequent_symmetry(operators: &str) -> Option<&str> {
    operators
        .split(',')
        .collect::<OrderedCounter>()
        .most_frequent()
}

/// `", "`-joined set of distinct operator tokens (order not guaranteed)
#[must_use]
pub fn unique_symmetries(operators: &str) -> String {
    let unique: HashSet<&str> = operators.split(',').collect();
    unique.into_iter().collect::<Vec<_>>().join(", ")
}

/// True iff all operator tokens are identical
#[must_use]
pub fn consistent_symmetry(operators: &str) -> bool {
    count_unique_symmetry(operators) == 1
}

/// Count of distinct operator tokens
#[must_use]
pub fn count_unique_symmetry(operators: &str) -> usize {
    operators.split(',').collect::<HashSet<_>>().len()
}

/// Extended tokens whose operator half differs from the reference operator.
///
/// Input is a `", "`-joined list of `<component>|<operator>` tokens; tokens
/// without an operator half are skipped with a warning.
#[must_use]
pub fn symmetry_variants(reference_operator: &str, extended_tokens: &str) -> String {
    extended_tokens
        .split(',')
        .map(str::trim)
        .filter(|token| match token.split_once('|') {
            Some((_, operator)) => operator != reference_operator,
            None => {
                warn!(%token, "Extended symmetry token has no operator half, skipping");
                false
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Per-component symmetry operators from the reference table, `"no-sym"`
/// when absent, positionally aligned with the input components.
#[must_use]
pub fn symmetry_operators(assembly: &str, tables: &ReferenceTables) -> String {
    assembly
        .split(',')
        .map(|component| tables.symmetry_operator(component))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::tables::ReferenceTablesBuilder;

    #[test]
    fn test_extended_symmetry_operators() {
        assert_eq!(
            extended_symmetry_operators("P1_2,P2_1", "C2,no-sym"),
            "P1_2|C2, P2_1|no-sym"
        );
    }

    #[test]
    fn test_asymmetrical_assemblies() {
        assert_eq!(asymmetrical_assemblies("P1_2,P2_1", "C2,no-sym"), "P2_1");
        assert_eq!(asymmetrical_assemblies("P1_2,P2_1", "C2,D3"), "");
    }

    #[test]
    fn test_pairing_truncates_at_shorter_side() {
        // Length mismatch silently drops the trailing component. Existing
        // wire behavior; a latent correctness risk for callers that do not
        // keep the two strings aligned.
        assert_eq!(
            extended_symmetry_operators("P1_2,P2_1,P3_1", "C2,no-sym"),
            "P1_2|C2, P2_1|no-sym"
        );
        assert_eq!(asymmetrical_assemblies("P1_2", "no-sym,no-sym"), "P1_2");
    }

    #[test]
    fn test_most_frequent_symmetry() {
        assert_eq!(most_frequent_symmetry("C2,C3,C2"), Some("C2"));
        // Tie resolves to the first-seen operator
        assert_eq!(most_frequent_symmetry("D3,C2,C2,D3"), Some("D3"));
    }

    #[test]
    fn test_unique_symmetries_set() {
        let joined = unique_symmetries("C2,no-sym,C2");
        let set: std::collections::HashSet<&str> = joined.split(", ").collect();
        assert_eq!(set, ["C2", "no-sym"].into_iter().collect());
    }

    #[test]
    fn test_consistent_symmetry() {
        assert!(consistent_symmetry("C2,C2,C2"));
        assert!(!consistent_symmetry("C2,D3"));
        // Property: consistency is exactly one distinct token
        for operators in ["C2", "C2,C2", "C2,D3", "no-sym,no-sym,C2"] {
            assert_eq!(
                consistent_symmetry(operators),
                count_unique_symmetry(operators) == 1
            );
        }
    }

    #[test]
    fn test_symmetry_variants() {
        assert_eq!(
            symmetry_variants("C2", "P1_2|C2, P2_1|no-sym, P3_1|D3"),
            "P2_1|no-sym, P3_1|D3"
        );
        assert_eq!(symmetry_variants("C2", "P1_2|C2"), "");
    }

    #[test]
    fn test_symmetry_variants_skips_operatorless_tokens() {
        // A token with no `|` half never reports as a variant, and the
        // well-formed tokens around it are unaffected
        assert_eq!(
            symmetry_variants("C2", "P1_2|C2, P2_1, P3_1|D3"),
            "P3_1|D3"
        );
        assert_eq!(symmetry_variants("C2", "P1_2"), "");
    }

    #[test]
    fn test_symmetry_operators_lookup() {
        let tables = ReferenceTablesBuilder::new()
            .with_symmetry(HashMap::from([("P1_2".to_string(), "C2".to_string())]))
            .build();

        assert_eq!(symmetry_operators("P1_2,P2_1", &tables), "C2,no-sym");
    }
}
