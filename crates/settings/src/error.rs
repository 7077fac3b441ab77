//! Error types for the settings layer

use storage::KvError;
use thiserror::Error;

/// Settings error types
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Underlying store failed
    #[error("Store error: {0}")]
    Store(#[from] KvError),

    /// A composite field contains the reserved separator
    #[error("Field {field} contains the reserved separator: {value:?}")]
    ReservedSeparator {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SettingsError::ReservedSeparator {
            field: "label",
            value: "a§splitter§b".to_string(),
        };
        assert!(err.to_string().contains("label"));
        assert!(err.to_string().contains("reserved separator"));

        let err = SettingsError::from(KvError::InvalidKey("".to_string()));
        assert!(err.to_string().starts_with("Store error"));
    }
}
