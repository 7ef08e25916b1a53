//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `KeyValueStorage` - Durable text slots addressed by key

mod key_value_storage;

pub use key_value_storage::{validate_key, KeyValueStorage, StorageError};
