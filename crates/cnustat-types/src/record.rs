use crate::FieldValue;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// The structured key-value result of parsing one log file.
///
/// Keys are unique and kept in first-occurrence order. A duplicate insert
/// does not overwrite the first value; the caller decides how to report it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecord {
    entries: Vec<(String, FieldValue)>,
    index: HashMap<String, usize>,
}

impl ParsedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. Returns false when the key was already present
    /// (first occurrence wins).
    pub fn insert(&mut self, key: String, value: FieldValue) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        true
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialize as an ordered map so JSON output mirrors the log.
impl Serialize for ParsedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
