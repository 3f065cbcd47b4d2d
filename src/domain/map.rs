use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::{btree_map::Entry, BTreeMap};

/// Field-level validation detail, field name to reason.
pub type Errors = CaseInsensitiveMap<String>;

/// Open-ended side-channel attached to an outcome.
pub type Metadata = CaseInsensitiveMap<Value>;

/// A string-keyed map whose keys compare case-insensitively.
///
/// The spelling used by the first insertion of a key is the one that gets
/// serialized; later writes under a differently-cased key replace the value
/// only. Entries are kept ordered by their folded key, which makes the
/// serialized form deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInsensitiveMap<V> {
    entries: BTreeMap<String, (String, V)>,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(&fold(key)).map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&fold(key))
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.entry(fold(&key)) {
            Entry::Occupied(mut entry) => Some(std::mem::replace(&mut entry.get_mut().1, value)),
            Entry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Right-biased union: entries of `other` win over entries of `self`.
    pub fn merge(&mut self, other: CaseInsensitiveMap<V>) {
        for (_, (key, value)) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .values()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|(key, _)| key.as_str())
    }
}

fn fold(key: &str) -> String {
    key.to_lowercase()
}

impl<K, V> FromIterator<(K, V)> for CaseInsensitiveMap<V>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for CaseInsensitiveMap<V>
where
    K: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<V> Serialize for CaseInsensitiveMap<V>
where
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V> Deserialize<'de> for CaseInsensitiveMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, V>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
