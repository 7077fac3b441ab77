//! In-memory preference store
//!
//! Used by tests and by hosts that do not need preferences to survive a
//! restart.

use crate::store::{validate_key, PrefValue, PreferenceStore, Result};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Preference store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, PrefValue>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, PrefValue)>,
        K: Into<String>,
    {
        let entries = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self { entries: RwLock::new(entries) }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl PreferenceStore for MemoryStore {
    fn get_value(&self, key: &str) -> Result<Option<PrefValue>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set_value(&self, key: &str, value: PrefValue) -> Result<()> {
        validate_key(key)?;
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.write().remove(key).is_some())
    }

    fn clear(&self) -> Result<()> {
        self.entries.write().clear();
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.entries.read().contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set_string("appMenuSize", "large").unwrap();
        store.set_bool("autoLaunch", true).unwrap();

        assert_eq!(store.get_string("appMenuSize").unwrap(), Some("large".to_string()));
        assert_eq!(store.get_bool("autoLaunch").unwrap(), Some(true));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_with_entries() {
        let store = MemoryStore::with_entries([
            ("textStyle", PrefValue::from("bold")),
            ("barVisibility", PrefValue::Bool(true)),
        ]);

        assert_eq!(store.keys(), vec!["barVisibility", "textStyle"]);
        assert!(store.contains("textStyle").unwrap());
    }

    #[test]
    fn test_overwrite_and_remove() {
        let store = MemoryStore::new();
        store.set_string("dateSize", "small").unwrap();
        store.set_string("dateSize", "large").unwrap();
        assert_eq!(store.get_string("dateSize").unwrap(), Some("large".to_string()));

        assert!(store.remove("dateSize").unwrap());
        assert!(!store.remove("dateSize").unwrap());
        assert_eq!(store.get_string("dateSize").unwrap(), None);
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        store.set_string("a", "1").unwrap();
        store.set_bool("b", false).unwrap();

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.set_bool(&format!("hiddenpkg{}-0", i), true).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 4);
    }
}
