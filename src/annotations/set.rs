//! The annotation set: string-keyed metadata attached to a resource
//!
//! An `AnnotationSet` is the sole input to extraction. It is supplied by an
//! external resource-watching component, may be empty, and may contain keys
//! no registry knows about — those are simply ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// String key/value metadata attached to one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationSet(HashMap<String, String>);

impl AnnotationSet {
    /// Creates an empty annotation set
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an annotation, replacing any previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the raw value for a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if the key is present, regardless of its value
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over all key/value pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for AnnotationSet {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnnotationSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = AnnotationSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.get("anything"), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut set = AnnotationSet::new();
        set.insert("enable-tracing", "true");
        assert_eq!(set.get("enable-tracing"), Some("true"));
        assert!(set.contains_key("enable-tracing"));
    }

    #[test]
    fn test_empty_value_is_present() {
        let set: AnnotationSet = [("tracing-operation-name", "")].into_iter().collect();
        assert!(set.contains_key("tracing-operation-name"));
        assert_eq!(set.get("tracing-operation-name"), Some(""));
    }

    #[test]
    fn test_from_iterator() {
        let set: AnnotationSet = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("b"), Some("2"));
    }

    #[test]
    fn test_serde_transparent_round_trip() {
        let set: AnnotationSet = [("enable-tracing", "true")].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"enable-tracing":"true"}"#);
        let back: AnnotationSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
