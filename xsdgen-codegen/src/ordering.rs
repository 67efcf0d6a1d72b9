//! Deterministic ordering of name/value maps for emission.

use std::cmp::Ordering;
use std::collections::HashMap;

/// A key/value pair in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvPair {
    /// Key.
    pub key: String,
    /// Value.
    pub value: String,
}

impl KvPair {
    /// Creates a new pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn emission_order(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| other.key.cmp(&self.key))
    }
}

/// Sorts a map into pairs by value ascending, then key descending.
///
/// The result does not depend on the map's iteration order.
#[must_use]
pub fn to_sorted_pairs(map: &HashMap<String, String>) -> Vec<KvPair> {
    let mut pairs: Vec<KvPair> = map
        .iter()
        .map(|(key, value)| KvPair::new(key.as_str(), value.as_str()))
        .collect();
    pairs.sort_by(KvPair::emission_order);
    pairs
}
