//! Key-value store for launcher preferences
//!
//! This module provides a persistent [`PreferenceStore`] backed by sled.
//! Values are stored as JSON-encoded [`PrefValue`]s.

use crate::store::{validate_key, PrefValue, PreferenceStore, Result};
use sled::Db;
use std::sync::Arc;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Background flush interval in milliseconds (None disables background
    /// flushing; call [`KvStore::flush`] explicitly)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "launcher_prefs.db".to_string(),
            cache_capacity: 8 * 1024 * 1024, // 8MB
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set background flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Persistent preference store
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Open (or create) a store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let db = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression)
            .flush_every_ms(config.flush_every_ms)
            .open()?;
        tracing::debug!(path = %config.path, "opened preference store");

        Ok(Self { db: Arc::new(db) })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Get the number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Export every entry, sorted by key
    pub fn export(&self) -> Result<Vec<(String, PrefValue)>> {
        let mut data = Vec::new();

        for item in self.db.iter() {
            let (key, value) = item?;
            let Ok(key_str) = String::from_utf8(key.to_vec()) else {
                continue;
            };
            match serde_json::from_slice::<PrefValue>(&value) {
                Ok(value) => data.push((key_str, value)),
                Err(e) => tracing::warn!(key = %key_str, "skipping unreadable entry: {}", e),
            }
        }

        Ok(data)
    }

    /// Import entries, overwriting existing keys
    pub fn import(&self, data: &[(String, PrefValue)]) -> Result<usize> {
        for (key, value) in data {
            self.set_value(key, value.clone())?;
        }
        Ok(data.len())
    }
}

impl PreferenceStore for KvStore {
    fn get_value(&self, key: &str) -> Result<Option<PrefValue>> {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn set_value(&self, key: &str, value: PrefValue) -> Result<()> {
        validate_key(key)?;
        let bytes = serde_json::to_vec(&value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    fn clear(&self) -> Result<()> {
        self.db.clear()?;
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(key.as_bytes())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KvError, ValueKind};
    use tempfile::TempDir;

    #[test]
    fn test_kv_store_creation() {
        let kv = KvStore::in_memory().unwrap();
        assert!(kv.is_empty());
    }

    #[test]
    fn test_set_and_get_string() {
        let kv = KvStore::in_memory().unwrap();

        kv.set_string("clockAlignment", "right").unwrap();

        let value = kv.get_string("clockAlignment").unwrap();
        assert_eq!(value, Some("right".to_string()));
    }

    #[test]
    fn test_set_and_get_bool() {
        let kv = KvStore::in_memory().unwrap();

        kv.set_bool("doubleTap", true).unwrap();

        assert_eq!(kv.get_bool("doubleTap").unwrap(), Some(true));
    }

    #[test]
    fn test_get_nonexistent() {
        let kv = KvStore::in_memory().unwrap();
        assert_eq!(kv.get_string("nonexistent").unwrap(), None);
        assert_eq!(kv.get_bool("nonexistent").unwrap(), None);
    }

    #[test]
    fn test_wrong_type() {
        let kv = KvStore::in_memory().unwrap();
        kv.set_bool("textFont", false).unwrap();

        let err = kv.get_string("textFont").unwrap_err();
        assert!(matches!(err, KvError::TypeMismatch { expected: ValueKind::String, .. }));
    }

    #[test]
    fn test_empty_key_rejected() {
        let kv = KvStore::in_memory().unwrap();
        assert!(matches!(kv.set_string("", "x"), Err(KvError::InvalidKey(_))));
    }

    #[test]
    fn test_remove() {
        let kv = KvStore::in_memory().unwrap();

        kv.set_string("key", "value").unwrap();
        assert!(kv.contains("key").unwrap());

        let removed = kv.remove("key").unwrap();
        assert!(removed);
        assert!(!kv.contains("key").unwrap());

        let removed_again = kv.remove("key").unwrap();
        assert!(!removed_again);
    }

    #[test]
    fn test_clear() {
        let kv = KvStore::in_memory().unwrap();

        kv.set_string("key1", "value1").unwrap();
        kv.set_bool("key2", true).unwrap();
        assert_eq!(kv.len(), 2);

        kv.clear().unwrap();
        assert!(kv.is_empty());
    }

    #[test]
    fn test_export_import() {
        let kv = KvStore::in_memory().unwrap();

        kv.set_string("textFont", "serif").unwrap();
        kv.set_bool("searchEnabled", false).unwrap();

        let exported = kv.export().unwrap();
        assert_eq!(exported.len(), 2);

        let kv2 = KvStore::in_memory().unwrap();
        assert_eq!(kv2.import(&exported).unwrap(), 2);

        assert_eq!(kv2.get_string("textFont").unwrap(), Some("serif".to_string()));
        assert_eq!(kv2.get_bool("searchEnabled").unwrap(), Some(false));
    }

    #[test]
    fn test_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.db");
        let config = KvConfig::new(path.to_string_lossy()).flush_every_ms(None);

        {
            let kv = KvStore::new(config.clone()).unwrap();
            kv.set_string("tempUnits", "fahrenheit").unwrap();
            kv.flush().unwrap();
        }

        let kv = KvStore::new(config).unwrap();
        assert_eq!(kv.get_string("tempUnits").unwrap(), Some("fahrenheit".to_string()));
    }

    #[test]
    fn test_no_background_flush_persists_after_explicit_flush() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("manual_flush.db");
        let config = KvConfig::new(path.to_string_lossy()).flush_every_ms(None);
        assert_eq!(config.flush_every_ms, None);

        {
            let kv = KvStore::new(config.clone()).unwrap();
            kv.set_bool("hiddenorg.example.maps-0", true).unwrap();
            kv.flush().unwrap();
        }

        let kv = KvStore::new(config).unwrap();
        assert_eq!(kv.get_bool("hiddenorg.example.maps-0").unwrap(), Some(true));
    }

    #[test]
    fn test_config_builder() {
        let config = KvConfig::new("test.db")
            .cache_capacity(32 * 1024 * 1024)
            .use_compression(false)
            .flush_every_ms(Some(1000));

        assert_eq!(config.path, "test.db");
        assert_eq!(config.cache_capacity, 32 * 1024 * 1024);
        assert!(!config.use_compression);
        assert_eq!(config.flush_every_ms, Some(1000));
    }
}
