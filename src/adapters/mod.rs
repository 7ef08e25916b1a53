//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value storage for the journal document (file, in-memory)

pub mod storage;

pub use storage::{FileKeyValueStorage, InMemoryKeyValueStorage};
