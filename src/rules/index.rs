//! Keyword to marker-token lookup table.

use crate::config::KeywordRule;
use std::collections::HashSet;

/// Ordered keyword table.
///
/// Entries keep insertion order, and so do the markers within an entry. That
/// order decides the order in which rule sections are concatenated, so it has
/// to be stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordIndex {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// Stored lower-cased; descriptions are lower-cased before lookup.
    keyword: String,
    markers: Vec<String>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from config rows, preserving their order.
    pub fn from_rules(rules: &[KeywordRule]) -> Self {
        let mut index = Self::new();
        for rule in rules {
            index.insert(&rule.keyword, &rule.markers);
        }
        index
    }

    /// Add markers for a keyword.
    ///
    /// A keyword that is already present keeps its position; new markers are
    /// appended to its list and duplicates are dropped.
    pub fn insert<K, I, M>(&mut self, keyword: K, markers: I)
    where
        K: AsRef<str>,
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        let keyword = keyword.as_ref().to_lowercase();
        let position = match self.entries.iter().position(|e| e.keyword == keyword) {
            Some(position) => position,
            None => {
                self.entries.push(Entry {
                    keyword,
                    markers: Vec::new(),
                });
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[position];
        for marker in markers {
            let marker = marker.as_ref();
            if !entry.markers.iter().any(|m| m == marker) {
                entry.markers.push(marker.to_string());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every distinct marker in the index, in first-seen order.
    pub fn markers(&self) -> Vec<&str> {
        collect_unique(self.entries.iter())
    }

    /// Markers whose keyword occurs in `description`, duplicates collapsed,
    /// first-seen order kept.
    pub fn matching_markers(&self, description: &str) -> Vec<&str> {
        let description = description.to_lowercase();
        collect_unique(
            self.entries
                .iter()
                .filter(|entry| description.contains(&entry.keyword)),
        )
    }
}

fn collect_unique<'a>(entries: impl Iterator<Item = &'a Entry>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for marker in entries.flat_map(|entry| entry.markers.iter()) {
        if seen.insert(marker.as_str()) {
            ordered.push(marker.as_str());
        }
    }
    ordered
}

impl<K, I, M> FromIterator<(K, I)> for KeywordIndex
where
    K: AsRef<str>,
    I: IntoIterator<Item = M>,
    M: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut index = Self::new();
        for (keyword, markers) in iter {
            index.insert(keyword, markers);
        }
        index
    }
}
