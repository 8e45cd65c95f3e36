use crate::{
    ConfigError, ConfigErrorResult, LogLevel, LoggingConfig, StorageConfig, ValidationConfig,
};

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::warn;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for TB_CONFIG_DIR env var, else use ./.tb/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse a TOML file with detailed error context
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TB_CONFIG_DIR env var > ./.tb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = env::var("TB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".tb"))
    }

    /// Absolute path of the snapshot directory
    pub fn storage_dir(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.dir))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = env::var("TB_STORAGE_DIR") {
            self.storage.dir = dir;
        }

        if let Ok(level) = env::var("TB_LOG_LEVEL") {
            // FromStr never fails, unknown values fall back to Info
            self.logging.level = LogLevel::from_str(&level).unwrap();
        }

        if let Ok(file) = env::var("TB_LOG_FILE") {
            self.logging.file = Some(file);
        }

        Self::override_number(&mut self.validation.min_people, "TB_VALIDATION_MIN_PEOPLE");
        Self::override_number(&mut self.validation.max_people, "TB_VALIDATION_MAX_PEOPLE");
        Self::override_number(
            &mut self.validation.min_description_length,
            "TB_VALIDATION_MIN_DESCRIPTION_LENGTH",
        );
        Self::override_number(
            &mut self.validation.max_title_length,
            "TB_VALIDATION_MAX_TITLE_LENGTH",
        );
    }

    fn override_number<T: FromStr>(target: &mut T, key: &str) {
        let Ok(value) = env::var(key) else {
            return;
        };

        match value.parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!("Ignoring non-numeric {}: {}", key, value),
        }
    }
}
