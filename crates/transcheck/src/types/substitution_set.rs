use crate::types::SubstitutionValue;

/// An insertion-ordered mapping from replace key to substitution value.
///
/// Keys keep their insertion order; re-inserting the same literal key replaces
/// its value in place. Two keys that differ only in letter case are distinct
/// entries here — rejecting such pairs is the validator's job, not the map's.
///
/// # Example
///
/// ```
/// use transcheck::substitutions;
///
/// let set = substitutions! { "name" => "Alice", "count" => "3" };
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get("name").and_then(|v| v.as_text()), Some("Alice"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubstitutionSet {
    entries: Vec<(String, SubstitutionValue)>,
}

impl SubstitutionSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair, replacing the value of an identical key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SubstitutionValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up a value by its literal key.
    pub fn get(&self, key: &str) -> Option<&SubstitutionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubstitutionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate entries ordered by descending key length.
    ///
    /// Keys of equal length keep their relative insertion order (stable sort).
    /// Discard must consume a key before any shorter key that is one of its
    /// textual prefixes, otherwise the shorter key's probe could match inside
    /// the longer key's placeholder name.
    pub fn iter_longest_first(&self) -> impl Iterator<Item = (&str, &SubstitutionValue)> {
        let mut ordered: Vec<&(String, SubstitutionValue)> = self.entries.iter().collect();
        ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        ordered.into_iter().map(|(k, v)| (k.as_str(), v))
    }
}
