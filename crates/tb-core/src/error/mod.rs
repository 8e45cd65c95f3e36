use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

pub use error_location::ErrorLocation;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid status ordinal: {value} {location}")]
    InvalidStatusOrdinal { value: u64, location: ErrorLocation },
}

impl CoreError {
    /// Create a validation error carrying the blocking message shown to the user
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
