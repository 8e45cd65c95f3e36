use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot encode error: {message} {location}")]
    Encode {
        message: String,
        location: ErrorLocation,
    },
}

impl StorageError {
    /// Create an encode error from anything that can describe itself
    #[track_caller]
    pub fn encode<E: std::fmt::Display>(error: E) -> Self {
        StorageError::Encode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
