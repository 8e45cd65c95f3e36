use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Column a project currently sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectStatus {
    /// Project is in progress
    #[default]
    Active,
    /// Project is done and moved to the finished column
    Finished,
}

impl ProjectStatus {
    /// Convert to the string representation used by the CLI and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Wire ordinal used by the persisted snapshot format
    pub fn ordinal(&self) -> u64 {
        match self {
            Self::Active => 0,
            Self::Finished => 1,
        }
    }

    /// Decode the wire ordinal; anything but 0 or 1 is a data error
    #[track_caller]
    pub fn from_ordinal(value: u64) -> CoreErrorResult<Self> {
        match value {
            0 => Ok(Self::Active),
            1 => Ok(Self::Finished),
            _ => Err(CoreError::InvalidStatusOrdinal {
                value,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(CoreError::InvalidProjectStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u64::deserialize(deserializer)?;
        Self::from_ordinal(value).map_err(DeError::custom)
    }
}
