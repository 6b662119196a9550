//! Ordered name → bool maps for JSON output.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Fixed-order set of named flags, serialized as a `{name: bool}` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagMap(Vec<(&'static str, bool)>);

impl FlagMap {
    /// Whether `key` is set. Unknown keys are `false`.
    pub fn is_set(&self, key: &str) -> bool {
        self.0.iter().any(|(k, set)| *k == key && *set)
    }

    /// Keys that are set, in order.
    pub fn set_keys(&self) -> Vec<&'static str> {
        self.0
            .iter()
            .filter(|(_, set)| *set)
            .map(|(k, _)| *k)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(&'static str, bool)> for FlagMap {
    fn from_iter<I: IntoIterator<Item = (&'static str, bool)>>(iter: I) -> Self {
        FlagMap(iter.into_iter().collect())
    }
}

impl Serialize for FlagMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, set) in &self.0 {
            map.serialize_entry(key, set)?;
        }
        map.end()
    }
}
