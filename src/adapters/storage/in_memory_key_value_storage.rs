//! In-Memory Key-Value Storage Adapter
//!
//! Keeps documents in a map. Useful for testing and development; can be told
//! to fail reads or writes to exercise the store's degraded paths.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{KeyValueStorage, StorageError};

/// In-memory storage for journal documents
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryKeyValueStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: Arc::new(RwLock::new(entries)),
            ..Self::default()
        }
    }

    /// Make every subsequent `get` fail with an IO error
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `set` fail with an IO error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw text currently stored under `key`
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::IoError("simulated read failure".to_string()));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::IoError("simulated write failure".to_string()));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_get_missing_key_is_none() {
        let storage = InMemoryKeyValueStorage::new();
        assert_eq!(storage.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_storage_set_then_get() {
        let storage = InMemoryKeyValueStorage::new();

        storage.set("k", "v").await.unwrap();

        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(storage.write_count(), 1);
    }

    #[tokio::test]
    async fn test_memory_storage_with_entry_is_readable() {
        let storage = InMemoryKeyValueStorage::with_entry("k", "seeded");
        assert_eq!(storage.raw("k").await.as_deref(), Some("seeded"));
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn test_memory_storage_simulated_write_failure_keeps_old_value() {
        let storage = InMemoryKeyValueStorage::with_entry("k", "old");
        storage.fail_writes(true);

        let result = storage.set("k", "new").await;

        assert!(matches!(result, Err(StorageError::IoError(_))));
        assert_eq!(storage.raw("k").await.as_deref(), Some("old"));
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn test_memory_storage_simulated_read_failure() {
        let storage = InMemoryKeyValueStorage::with_entry("k", "v");
        storage.fail_reads(true);

        assert!(storage.get("k").await.is_err());

        storage.fail_reads(false);
        assert!(storage.get("k").await.is_ok());
    }

    #[tokio::test]
    async fn test_memory_storage_clones_share_entries() {
        let storage = InMemoryKeyValueStorage::new();
        let handle = storage.clone();

        handle.set("k", "shared").await.unwrap();

        assert_eq!(storage.raw("k").await.as_deref(), Some("shared"));
    }
}
