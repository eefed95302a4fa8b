//! Candidate data for the selectable list.
//!
//! A combobox is built over a fixed, fully in-memory candidate set. Sources
//! come in two shapes -- a flat sequence of keys, or a key-to-value mapping
//! whose values feed label generation -- and are resolved once at
//! construction into a single sorted [`CandidateStore`]. The store never
//! changes for the lifetime of the combobox; "filtering" while the user
//! types is emulated by moving the highlight to the nearest matching entry
//! while every entry stays present and choosable.

use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};
use crate::options::LabelGenerator;

// ============================================================================
// Candidate Source
// ============================================================================

/// The raw data a combobox is constructed from.
///
/// Shape is resolved exactly once, at construction; the rest of the crate
/// only ever sees the normalized [`CandidateStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    /// A flat sequence of keys. Each key doubles as its own associated
    /// value for label generation.
    List(Vec<String>),
    /// Key/value pairs. The value is used only for label generation.
    Map(Vec<(String, String)>),
}

impl CandidateSource {
    /// Whether the source holds no entries.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(keys) => keys.is_empty(),
            Self::Map(pairs) => pairs.is_empty(),
        }
    }
}

impl From<Vec<String>> for CandidateSource {
    fn from(keys: Vec<String>) -> Self {
        Self::List(keys)
    }
}

impl From<Vec<&str>> for CandidateSource {
    fn from(keys: Vec<&str>) -> Self {
        Self::List(keys.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CandidateSource {
    fn from(keys: [&str; N]) -> Self {
        Self::List(keys.into_iter().map(String::from).collect())
    }
}

impl From<BTreeMap<String, String>> for CandidateSource {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self::Map(map.into_iter().collect())
    }
}

impl From<HashMap<String, String>> for CandidateSource {
    fn from(map: HashMap<String, String>) -> Self {
        Self::Map(map.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for CandidateSource {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

// ============================================================================
// Candidate
// ============================================================================

/// One selectable entry: an opaque key plus its derived display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The key written into the text field when this entry is selected.
    pub key: String,
    /// The label shown in the list surface.
    pub label: String,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

// ============================================================================
// Candidate Store
// ============================================================================

/// The normalized, sorted candidate set.
///
/// Entries are sorted by key using case-sensitive byte-wise ordering with a
/// stable sort, so equal keys keep their source order. The store is
/// guaranteed non-empty and immutable after construction.
#[derive(Debug, Clone)]
pub struct CandidateStore {
    entries: Vec<Candidate>,
}

impl CandidateStore {
    /// Build the store from a source, generating labels as we go.
    ///
    /// For `List` sources the key doubles as the associated value passed to
    /// the label generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCandidates`] if the source has no entries.
    pub fn from_source(source: CandidateSource, generator: &LabelGenerator) -> Result<Self> {
        if source.is_empty() {
            return Err(Error::EmptyCandidates);
        }

        let mut entries: Vec<Candidate> = match source {
            CandidateSource::List(keys) => keys
                .into_iter()
                .map(|key| {
                    let label = generator(&key, &key);
                    Candidate { key, label }
                })
                .collect(),
            CandidateSource::Map(pairs) => pairs
                .into_iter()
                .map(|(key, value)| {
                    let label = generator(&key, &value);
                    Candidate { key, label }
                })
                .collect(),
        };

        entries.sort_by(|a, b| a.key.cmp(&b.key));

        Ok(Self { entries })
    }

    /// Get the number of candidates. Always at least 1.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Present for API completeness; a constructed store is never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All candidates in sorted order.
    pub fn entries(&self) -> &[Candidate] {
        &self.entries
    }

    /// Get the candidate at an index.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.entries.get(index)
    }

    /// Index of the last candidate.
    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// Find the first candidate whose key is lexicographically `>=` the
    /// given text (type-ahead nearest match).
    ///
    /// Returns `None` when every key sorts before the text.
    pub fn nearest_match(&self, text: &str) -> Option<usize> {
        let idx = self.entries.partition_point(|c| c.key.as_str() < text);
        (idx < self.entries.len()).then_some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::default_label_generator;

    fn store_from(source: impl Into<CandidateSource>) -> CandidateStore {
        CandidateStore::from_source(source.into(), &default_label_generator()).unwrap()
    }

    #[test]
    fn test_empty_sources_rejected() {
        let generator = default_label_generator();
        let empty_list = CandidateSource::List(Vec::new());
        assert!(matches!(
            CandidateStore::from_source(empty_list, &generator),
            Err(Error::EmptyCandidates)
        ));

        let empty_map = CandidateSource::Map(Vec::new());
        assert!(matches!(
            CandidateStore::from_source(empty_map, &generator),
            Err(Error::EmptyCandidates)
        ));
    }

    #[test]
    fn test_list_source_sorted_and_labeled() {
        let store = store_from(["cherry", "apple", "banana"]);

        let keys: Vec<&str> = store.entries().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["apple", "banana", "cherry"]);
        // Flat sources feed the key through as its own value.
        assert_eq!(store.get(0).unwrap().label, "apple: apple");
    }

    #[test]
    fn test_map_source_sorted_by_key() {
        let store = store_from([("b2", "Banana"), ("a1", "Apple")]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().key, "a1");
        assert_eq!(store.get(0).unwrap().label, "a1: Apple");
        assert_eq!(store.get(1).unwrap().key, "b2");
        assert_eq!(store.get(1).unwrap().label, "b2: Banana");
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        // Byte-wise ordering puts uppercase before lowercase.
        let store = store_from(["apple", "Banana"]);
        assert_eq!(store.get(0).unwrap().key, "Banana");
        assert_eq!(store.get(1).unwrap().key, "apple");
    }

    #[test]
    fn test_stable_sort_keeps_duplicate_order() {
        let generator: LabelGenerator = std::sync::Arc::new(|_key, value| value.to_string());
        let source = CandidateSource::Map(vec![
            ("dup".to_string(), "first".to_string()),
            ("aaa".to_string(), "other".to_string()),
            ("dup".to_string(), "second".to_string()),
        ]);
        let store = CandidateStore::from_source(source, &generator).unwrap();

        assert_eq!(store.get(1).unwrap().label, "first");
        assert_eq!(store.get(2).unwrap().label, "second");
    }

    #[test]
    fn test_nearest_match() {
        let store = store_from(["apple", "banana", "cherry"]);

        assert_eq!(store.nearest_match("b"), Some(1)); // banana
        assert_eq!(store.nearest_match("banana"), Some(1)); // exact
        assert_eq!(store.nearest_match("a"), Some(0));
        assert_eq!(store.nearest_match(""), Some(0)); // empty text matches first
        assert_eq!(store.nearest_match("cz"), None);
        assert_eq!(store.nearest_match("z"), None);
    }

    #[test]
    fn test_single_candidate_bounds() {
        let store = store_from(["only"]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.last_index(), 0);
        assert_eq!(store.nearest_match("a"), Some(0));
        assert_eq!(store.nearest_match("z"), None);
    }
}
