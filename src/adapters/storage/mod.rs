//! Storage Adapters
//!
//! Implementations of the KeyValueStorage port for persisting the journal.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStorage** - Stores each key as a JSON file on disk
//! - **InMemoryKeyValueStorage** - Stores keys in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStorage, InMemoryKeyValueStorage};
//!
//! // Production: file-based storage
//! let storage = FileKeyValueStorage::new("./data");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryKeyValueStorage::new();
//! ```

mod file_key_value_storage;
mod in_memory_key_value_storage;

pub use file_key_value_storage::FileKeyValueStorage;
pub use in_memory_key_value_storage::InMemoryKeyValueStorage;
