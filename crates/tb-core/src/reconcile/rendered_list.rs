use crate::Project;

use uuid::Uuid;

/// A rendered column of project rows, addressable by project id.
///
/// The reconciler only ever appends new rows and excises stale ones; rows
/// that survive a pass are never touched or reordered, so incidental
/// per-row state (an in-progress drag, a selection) is preserved.
pub trait RenderedList {
    /// Ids of the rows currently rendered, in display order
    fn rendered_ids(&self) -> Vec<Uuid>;

    /// Append a row for a project that is not rendered yet
    fn insert(&mut self, project: &Project);

    /// Remove the row with the given id, wherever it sits
    fn remove(&mut self, id: Uuid);
}
