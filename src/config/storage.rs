//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::application::DEFAULT_STORAGE_KEY;
use crate::ports::validate_key;

/// Where the journal is kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key (file stem) the journal is stored under
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_key(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        validate_key(&self.key).map_err(|_| ValidationError::InvalidStorageKey)?;
        Ok(())
    }
}
