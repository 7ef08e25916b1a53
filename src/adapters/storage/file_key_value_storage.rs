//! File-based Key-Value Storage Adapter
//!
//! Stores each key as `<key>.json` inside a base directory.
//! Writes go to a sibling temp file first and are renamed into place, so a
//! crash mid-write leaves the previous document intact.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{validate_key, KeyValueStorage, StorageError};

/// File-based storage for journal documents
#[derive(Debug, Clone)]
pub struct FileKeyValueStorage {
    base_path: PathBuf,
}

impl FileKeyValueStorage {
    /// Create a new file storage with a base directory
    ///
    /// The directory is created lazily on the first write.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileKeyValueStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the base directory
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path backing a key
    fn file_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!(".{}.json.tmp", key))
    }

    /// Ensure directory exists
    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStorage for FileKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;

        match fs::read_to_string(self.file_path(key)).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.ensure_dir().await?;

        let temp = self.temp_path(key);
        fs::write(&temp, value)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        fs::rename(&temp, self.file_path(key))
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        Ok(())
    }
}
