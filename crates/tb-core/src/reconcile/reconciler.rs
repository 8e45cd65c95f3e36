//! Incremental synchronization of a rendered column with a target subset.
//!
//! Rebuilding a column from scratch on every snapshot would destroy row
//! state that has nothing to do with the change (drag visuals on the other
//! rows, for one). The reconciler instead computes the minimal set of
//! appends and removals and leaves every surviving row alone.

use crate::{ListDiff, Project, RenderedList};

use std::collections::HashSet;

use uuid::Uuid;

/// Compare a rendered column against the target subset, both directions.
///
/// Pure set difference: insertions come back in target order, removals in
/// rendered order. Applying the same target twice yields an empty diff the
/// second time.
pub fn diff(rendered: &[Uuid], target: &[Project]) -> ListDiff {
    let rendered_set: HashSet<Uuid> = rendered.iter().copied().collect();
    let target_set: HashSet<Uuid> = target.iter().map(|project| project.id).collect();

    ListDiff {
        insertions: target
            .iter()
            .map(|project| project.id)
            .filter(|id| !rendered_set.contains(id))
            .collect(),
        removals: rendered
            .iter()
            .copied()
            .filter(|id| !target_set.contains(id))
            .collect(),
    }
}

/// Bring a rendered column in sync with the target subset.
///
/// New rows are appended first, in target order. The removal pass only runs
/// when the row count still differs from the target afterwards: once the
/// missing rows are in, the rendered ids are a superset of the target, so a
/// count mismatch is exactly the presence of stale rows. A target that
/// matches the rendered column triggers no work at all.
pub fn reconcile(list: &mut dyn RenderedList, target: &[Project]) {
    let rendered: HashSet<Uuid> = list.rendered_ids().into_iter().collect();

    for project in target {
        if !rendered.contains(&project.id) {
            list.insert(project);
        }
    }

    let target_ids: HashSet<Uuid> = target.iter().map(|project| project.id).collect();
    let rendered_after = list.rendered_ids();

    if rendered_after.len() != target_ids.len() {
        for id in rendered_after {
            if !target_ids.contains(&id) {
                list.remove(id);
            }
        }
    }
}
