pub mod error;
pub mod file_snapshot_store;
pub mod snapshot_store;

pub use error::{Result, StorageError};
pub use file_snapshot_store::FileSnapshotStore;
pub use snapshot_store::SnapshotStore;

/// File name of the single snapshot slot
pub const SNAPSHOT_FILE_NAME: &str = "projects.json";
