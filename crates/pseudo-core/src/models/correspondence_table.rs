use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Render the placeholder for the `n`-th distinct entity of a category.
pub fn format_placeholder(category_word: &str, n: usize) -> String {
    format!("[{category_word}_{n}]")
}

/// Insertion-ordered mapping from normalized surface text to placeholder.
///
/// Keys are unique and so are placeholders. Entries keep first-seen order,
/// which is also the order they serialize in: a flat JSON object
/// `{"Jean": "[PERSONNE_1]", ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrespondenceTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl CorrespondenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Placeholder assigned to `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Return the placeholder for `key`, assigning the next one for
    /// `category_word` the first time `key` is seen.
    ///
    /// The counter is the number of distinct keys, so it only advances on a
    /// new key.
    pub fn get_or_assign(&mut self, key: &str, category_word: &str) -> &str {
        let existing = self.index.get(key).copied();
        let i = match existing {
            Some(i) => i,
            None => {
                let placeholder = format_placeholder(category_word, self.entries.len() + 1);
                self.push(key.to_string(), placeholder)
            }
        };
        &self.entries[i].1
    }

    /// Original surface text behind `placeholder`.
    pub fn original_for(&self, placeholder: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, p)| p == placeholder)
            .map(|(k, _)| k.as_str())
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, p)| p.as_str())
    }

    fn push(&mut self, key: String, placeholder: String) -> usize {
        let i = self.entries.len();
        self.index.insert(key.clone(), i);
        self.entries.push((key, placeholder));
        i
    }
}

impl Serialize for CorrespondenceTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, placeholder) in &self.entries {
            map.serialize_entry(key, placeholder)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CorrespondenceTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = CorrespondenceTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a flat object mapping surface text to placeholder")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = CorrespondenceTable::new();
        while let Some((key, placeholder)) = access.next_entry::<String, String>()? {
            if table.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate surface text '{key}'")));
            }
            if table.original_for(&placeholder).is_some() {
                return Err(de::Error::custom(format!(
                    "placeholder '{placeholder}' assigned twice"
                )));
            }
            table.push(key, placeholder);
        }
        Ok(table)
    }
}
