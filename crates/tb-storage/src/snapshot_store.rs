use crate::Result as StorageErrorResult;

use tb_core::Project;

/// Durable slot for the full project collection.
///
/// `load` is total: a missing or unreadable slot means "no data" and yields
/// an empty collection. Writes are best-effort; callers decide what a
/// failed save means (the store logs and carries on).
pub trait SnapshotStore {
    /// Read the persisted collection, empty when there is none
    fn load(&self) -> Vec<Project>;

    /// Replace the persisted collection with `projects`
    fn save(&self, projects: &[Project]) -> StorageErrorResult<()>;
}
