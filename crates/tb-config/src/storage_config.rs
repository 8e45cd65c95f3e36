use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR};

use std::path::Path;

use serde::Deserialize;

/// Where the snapshot slot lives, relative to the config directory
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = Path::new(&self.dir);

        if dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        if self.dir.is_empty() {
            return Err(ConfigError::storage("storage.dir cannot be empty"));
        }

        Ok(())
    }
}
