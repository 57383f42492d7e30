// ============================================================
// TABLE DOCUMENT TYPES
// ============================================================
// Headers and content rows accumulated from one delimited file

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Build the positional key for a zero-based column index
pub fn positional_key(prefix: &str, index: usize) -> String {
    format!("{}{}", prefix, index)
}

/// One header cell: positional key plus cleaned display value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderEntry {
    pub key: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: String, value: String) -> Self {
        Self { key, value }
    }
}

/// One content row, fields keyed by positional key in arrival order.
///
/// Values are stored exactly as read; only header values get cleaned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRow {
    fields: Vec<(String, String)>,
}

impl ContentRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value under `key`
    pub fn insert(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Append without checking for an existing key.
    ///
    /// Callers must not repeat a key; positional keys from one record never do.
    pub fn push(&mut self, key: String, value: String) {
        self.fields.push((key, value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove the field under `key`; returns whether anything was removed
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|(k, _)| k != key);
        self.fields.len() != before
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for ContentRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The (headers, rows) aggregate produced by one full parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableDocument {
    pub head: Vec<HeaderEntry>,
    pub body: Vec<ContentRow>,
}

impl TableDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_keys(&self) -> Vec<&str> {
        self.head.iter().map(|h| h.key.as_str()).collect()
    }

    pub fn header_values(&self) -> Vec<&str> {
        self.head.iter().map(|h| h.value.as_str()).collect()
    }
}
