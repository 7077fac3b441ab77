//! The preference store capability
//!
//! Every persisted preference is either a string or a boolean. Hosts hand a
//! [`PreferenceStore`] to the settings layer instead of exposing a global.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored value has a different type than the one requested
    #[error("Type mismatch for key {key}: expected {expected}")]
    TypeMismatch {
        /// The key that was read
        key: String,
        /// The kind the caller asked for
        expected: ValueKind,
    },

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// A single stored preference value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    /// Boolean flag
    Bool(bool),
    /// String value (numbers are stored as strings too)
    Str(String),
}

impl PrefValue {
    /// The kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            PrefValue::Bool(_) => ValueKind::Bool,
            PrefValue::Str(_) => ValueKind::String,
        }
    }

    /// Extract a string, failing with [`KvError::TypeMismatch`] for booleans
    pub fn into_string(self, key: &str) -> Result<String> {
        match self {
            PrefValue::Str(s) => Ok(s),
            PrefValue::Bool(_) => Err(KvError::TypeMismatch {
                key: key.to_string(),
                expected: ValueKind::String,
            }),
        }
    }

    /// Extract a boolean, failing with [`KvError::TypeMismatch`] for strings
    pub fn into_bool(self, key: &str) -> Result<bool> {
        match self {
            PrefValue::Bool(b) => Ok(b),
            PrefValue::Str(_) => Err(KvError::TypeMismatch {
                key: key.to_string(),
                expected: ValueKind::Bool,
            }),
        }
    }
}

impl From<bool> for PrefValue {
    fn from(value: bool) -> Self {
        PrefValue::Bool(value)
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        PrefValue::Str(value.to_string())
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        PrefValue::Str(value)
    }
}

/// Kind of a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// [`PrefValue::Bool`]
    Bool,
    /// [`PrefValue::Str`]
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => f.write_str("bool"),
            ValueKind::String => f.write_str("string"),
        }
    }
}

/// Persistent mapping from string keys to string or boolean values
///
/// Implementations serialize their own reads and writes. A write must be
/// visible to later reads in the same process. Nothing here is atomic across
/// multiple keys.
pub trait PreferenceStore: Send + Sync {
    /// Read the raw value stored under `key`
    fn get_value(&self, key: &str) -> Result<Option<PrefValue>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_value(&self, key: &str, value: PrefValue) -> Result<()>;

    /// Remove `key`, returning whether it existed
    fn remove(&self, key: &str) -> Result<bool>;

    /// Remove every key
    fn clear(&self) -> Result<()>;

    /// Check if a key exists
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get_value(key)?.is_some())
    }

    /// Read a string value
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        self.get_value(key)?.map(|v| v.into_string(key)).transpose()
    }

    /// Read a boolean value
    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.get_value(key)?.map(|v| v.into_bool(key)).transpose()
    }

    /// Write a string value
    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, PrefValue::from(value))
    }

    /// Write a boolean value
    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set_value(key, PrefValue::Bool(value))
    }
}

pub(crate) fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(KvError::InvalidKey("key must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pref_value_json_shape() {
        assert_eq!(serde_json::to_string(&PrefValue::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&PrefValue::from("left")).unwrap(), "\"left\"");

        let parsed: PrefValue = serde_json::from_str("\"200\"").unwrap();
        assert_eq!(parsed, PrefValue::Str("200".to_string()));
        let parsed: PrefValue = serde_json::from_str("false").unwrap();
        assert_eq!(parsed, PrefValue::Bool(false));
    }

    #[test]
    fn test_type_mismatch() {
        let err = PrefValue::Bool(true).into_string("textFont").unwrap_err();
        assert!(matches!(err, KvError::TypeMismatch { expected: ValueKind::String, .. }));
        assert!(err.to_string().contains("textFont"));

        let err = PrefValue::from("yes").into_bool("clockEnabled").unwrap_err();
        assert!(err.to_string().contains("expected bool"));
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("bgColor").is_ok());
        assert!(matches!(validate_key(""), Err(KvError::InvalidKey(_))));
    }
}
