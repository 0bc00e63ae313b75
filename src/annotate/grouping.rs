use std::collections::HashMap;

use crate::core::component::{Component, ParseError};

/// Counting structure that remembers first-seen order.
///
/// `most_frequent` ties are resolved in favor of the earliest-seen value,
/// which callers rely on for deterministic majority votes.
#[derive(Debug, Default)]
pub struct OrderedCounter<'a> {
    counts: Vec<(&'a str, usize)>,
}

impl<'a> OrderedCounter<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &'a str) {
        if let Some(entry) = self.counts.iter_mut().find(|(v, _)| *v == value) {
            entry.1 += 1;
        } else {
            self.counts.push((value, 1));
        }
    }

    /// The value with the highest count, first-seen among ties
    #[must_use]
    pub fn most_frequent(&self) -> Option<&'a str> {
        // max_by_key would return the LAST maximum on ties; the strict
        // comparison keeps the earliest-seen value instead.
        let mut best: Option<(&'a str, usize)> = None;
        for &(value, count) in &self.counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }
}

impl<'a> FromIterator<&'a str> for OrderedCounter<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = Self::new();
        for value in iter {
            counter.add(value);
        }
        counter
    }
}

/// Partition component identifiers into accession -> ordered stoichiometry
/// list. Duplicate accessions accumulate a growing list in encounter order;
/// iteration order over the keys themselves is unspecified.
///
/// # Errors
///
/// Returns the component-level `ParseError` for the first identifier that
/// does not split into exactly accession + stoichiometry.
pub fn group_by_accession<'a, I>(identifiers: I) -> Result<HashMap<String, Vec<u32>>, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut grouped: HashMap<String, Vec<u32>> = HashMap::new();
    for identifier in identifiers {
        let component = Component::parse(identifier)?;
        grouped
            .entry(component.accession)
            .or_default()
            .push(component.stoichiometry);
    }
    Ok(grouped)
}

/// Build both directions of an adjacency relation in a single pass:
/// sub -> supers and super -> subs.
#[must_use]
pub fn group_bidirectional(
    pairs: &[(String, String)],
) -> (HashMap<String, Vec<String>>, HashMap<String, Vec<String>>) {
    let mut sub_to_supers: HashMap<String, Vec<String>> = HashMap::new();
    let mut super_to_subs: HashMap<String, Vec<String>> = HashMap::new();

    for (sub, sup) in pairs {
        sub_to_supers
            .entry(sub.clone())
            .or_default()
            .push(sup.clone());
        super_to_subs
            .entry(sup.clone())
            .or_default()
            .push(sub.clone());
    }

    (sub_to_supers, super_to_subs)
}
