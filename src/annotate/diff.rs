use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Four-way diff between two key -> value maps
///
/// `added` holds keys only in the first map, `removed` keys only in the
/// second; `modified` carries the (first, second) values for shared keys
/// that differ. Values are compared shallowly, with no recursion.
#[derive(Debug, Clone)]
pub struct MapDiff<K, V> {
    pub added: HashSet<K>,
    pub removed: HashSet<K>,
    pub modified: HashMap<K, (V, V)>,
    pub unchanged: HashSet<K>,
}

/// Compare two maps key-by-key.
#[must_use]
pub fn compare_maps<K, V>(first: &HashMap<K, V>, second: &HashMap<K, V>) -> MapDiff<K, V>
where
    K: Eq + Hash + Clone,
    V: PartialEq + Clone,
{
    let mut diff = MapDiff {
        added: HashSet::new(),
        removed: HashSet::new(),
        modified: HashMap::new(),
        unchanged: HashSet::new(),
    };

    for (key, value) in first {
        match second.get(key) {
            None => {
                diff.added.insert(key.clone());
            }
            Some(other) if other == value => {
                diff.unchanged.insert(key.clone());
            }
            Some(other) => {
                diff.modified
                    .insert(key.clone(), (value.clone(), other.clone()));
            }
        }
    }

    for key in second.keys() {
        if !first.contains_key(key) {
            diff.removed.insert(key.clone());
        }
    }

    diff
}
