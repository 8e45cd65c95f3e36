use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const DEFAULT_MIN_PEOPLE: i64 = 1;
pub const DEFAULT_MAX_PEOPLE: i64 = 10;
pub const MAX_CONFIGURABLE_PEOPLE: i64 = 100;

pub const DEFAULT_MIN_DESCRIPTION_LENGTH: usize = 5;
pub const MAX_CONFIGURABLE_DESCRIPTION_LENGTH: usize = 1000;

pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;
pub const MAX_CONFIGURABLE_TITLE_LENGTH: usize = 500;

/// Field limits applied when a new project is gathered from user input
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Smallest number of people a project may have assigned
    pub min_people: i64,
    /// Largest number of people a project may have assigned
    pub max_people: i64,
    /// Minimum description length after sanitization
    pub min_description_length: usize,
    /// Maximum title length after sanitization
    pub max_title_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_people: DEFAULT_MIN_PEOPLE,
            max_people: DEFAULT_MAX_PEOPLE,
            min_description_length: DEFAULT_MIN_DESCRIPTION_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_people < 1 {
            return Err(ConfigError::validation(format!(
                "validation.min_people must be at least 1, got {}",
                self.min_people
            )));
        }

        if self.max_people < self.min_people || self.max_people > MAX_CONFIGURABLE_PEOPLE {
            return Err(ConfigError::validation(format!(
                "validation.max_people must be {}-{}, got {}",
                self.min_people, MAX_CONFIGURABLE_PEOPLE, self.max_people
            )));
        }

        if self.min_description_length > MAX_CONFIGURABLE_DESCRIPTION_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.min_description_length must be at most {}, got {}",
                MAX_CONFIGURABLE_DESCRIPTION_LENGTH, self.min_description_length
            )));
        }

        if self.max_title_length == 0 || self.max_title_length > MAX_CONFIGURABLE_TITLE_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_title_length must be 1-{}, got {}",
                MAX_CONFIGURABLE_TITLE_LENGTH, self.max_title_length
            )));
        }

        Ok(())
    }
}
