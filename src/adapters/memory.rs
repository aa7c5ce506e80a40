use crate::domain::ports::{PropertyStore, SystemProperties};
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// In-memory property map. Stands in for both the fork medium and the
/// process-wide surface, so nothing global is touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryProperties {
    entries: BTreeMap<String, String>,
}

impl MemoryProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl PropertyStore for MemoryProperties {
    fn get_property(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_property(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl SystemProperties for MemoryProperties {
    fn get(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.entries.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut props = MemoryProperties::new();
        props.set_property("key", "one");
        props.set_property("key", "two");
        assert_eq!(props.get_property("key").as_deref(), Some("two"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_iter_is_sorted() {
        let props: MemoryProperties = [("b", "2"), ("a", "1")].into_iter().collect();
        let keys: Vec<&str> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
