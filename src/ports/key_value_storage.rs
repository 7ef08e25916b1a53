//! Key-Value Storage Port - Interface for the durable slot the journal lives in.
//!
//! The journal is written as one text document under a single key, the way a
//! browser would keep it in local storage. Adapters decide where the text
//! actually goes.

use async_trait::async_trait;

/// Errors that can occur during storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Failed to serialize journal: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize journal: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported journal schema version {found} (newest known is {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for reading and writing text documents by key
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the text stored under `key`
    ///
    /// # Returns
    /// `None` if nothing has been stored under the key yet
    ///
    /// # Errors
    /// Returns `StorageError` if the medium cannot be read
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the text stored under `key`
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Checks that `key` is usable as a storage slot name.
///
/// Keys are restricted to ASCII letters, digits, `.`, `_` and `-`, and may not
/// start with a dot, so every adapter can map them onto file names safely.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let invalid = |reason: &str| StorageError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    if key.is_empty() {
        return Err(invalid("key cannot be empty"));
    }
    if key.starts_with('.') {
        return Err(invalid("key cannot start with '.'"));
    }
    if let Some(c) = key
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(invalid(&format!("character {:?} is not allowed", c)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_dotted_names() {
        assert!(validate_key("decision-journal.decisions").is_ok());
        assert!(validate_key("journal_v2").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_unsafe_names() {
        assert!(validate_key("").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("with space").is_err());
    }

    #[test]
    fn test_storage_error_invalid_key() {
        let err = StorageError::InvalidKey {
            key: "../etc".to_string(),
            reason: "path separators are not allowed".to_string(),
        };
        assert!(err.to_string().contains("../etc"));
        assert!(err.to_string().contains("path separators"));
    }

    #[test]
    fn test_storage_error_unsupported_schema() {
        let err = StorageError::UnsupportedSchema {
            found: 3,
            supported: 1,
        };
        assert!(err.to_string().contains("version 3"));
    }

    #[test]
    fn test_storage_error_deserialization() {
        let err = StorageError::DeserializationFailed("expected value".to_string());
        assert!(err.to_string().contains("deserialize"));
    }
}
