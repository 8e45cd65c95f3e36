//! Observable holder of the project collection.
//!
//! The store owns the authoritative collection exclusively; views only ever
//! see snapshots handed to their listeners, recomputed and re-delivered
//! after every mutation.

use crate::SubscriptionId;

use tb_core::{Project, ProjectStatus};
use tb_storage::SnapshotStore;

use log::{debug, warn};
use uuid::Uuid;

/// Callback invoked with a snapshot of the collection after every mutation
pub type Listener = Box<dyn FnMut(&[Project])>;

/// Owns the project collection and fans out snapshots to subscribers after
/// every mutation, in subscription order.
///
/// Single-threaded by contract: a mutation and the notification fan-out it
/// triggers complete before the mutating call returns, so every listener
/// sees a fully-applied mutation. Embeddings with more than one thread must
/// serialize mutate+notify externally.
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    snapshots: Option<Box<dyn SnapshotStore>>,
    initialized: bool,
}

impl ProjectStore {
    /// Store without a persistence slot; state lives for the session only
    pub fn in_memory() -> Self {
        Self {
            projects: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
            snapshots: None,
            initialized: false,
        }
    }

    /// Store that writes the collection to `snapshots` after every mutation
    pub fn with_snapshot_store(snapshots: Box<dyn SnapshotStore>) -> Self {
        Self {
            projects: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
            snapshots: Some(snapshots),
            initialized: false,
        }
    }

    /// Register a listener for future mutations.
    /// Delivery order is registration order.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));

        debug!("Registered listener {:?}", id);
        id
    }

    /// Drop a registration. Returns false for an unknown handle.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Load the persisted collection, replacing in-memory state, then
    /// notify. Call once at startup, after subscribers are registered;
    /// repeated calls are ignored.
    pub fn init(&mut self) {
        if self.initialized {
            warn!("Store already initialized, ignoring repeated init");
            return;
        }
        self.initialized = true;

        let Some(snapshots) = &self.snapshots else {
            debug!("No snapshot slot configured, starting empty");
            return;
        };

        self.projects = snapshots.load();
        debug!("Loaded {} project(s) from the snapshot slot", self.projects.len());
        self.notify();
    }

    /// Append a new Active project built from caller-validated input and
    /// return its id
    pub fn add_project(&mut self, title: String, description: String, people: i64) -> Uuid {
        let project = Project::new(title, description, people);
        let id = project.id;

        debug!("Adding project '{}' as {}", project.title, id);
        self.projects.push(project);
        self.persist();
        self.notify();

        id
    }

    /// Move a project to another column. Unknown ids and moves to the
    /// current column are silent no-ops, so a re-delivered drop event
    /// neither fails nor double-notifies.
    pub fn move_project(&mut self, id: Uuid, new_status: ProjectStatus) {
        let Some(project) = self
            .projects
            .iter_mut()
            .find(|project| project.id == id && project.status != new_status)
        else {
            debug!("Ignoring move of {} to {}", id, new_status);
            return;
        };

        debug!("Moving {} to {}", id, new_status);
        project.status = new_status;
        self.persist();
        self.notify();
    }

    /// Remove a project. Unknown ids are a silent no-op.
    pub fn delete_project(&mut self, id: Uuid) {
        let before = self.projects.len();
        self.projects.retain(|project| project.id != id);

        if self.projects.len() == before {
            debug!("Ignoring delete of unknown project {}", id);
            return;
        }

        debug!("Deleted project {}", id);
        self.persist();
        self.notify();
    }

    /// Snapshot of the current collection
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    fn persist(&self) {
        let Some(snapshots) = &self.snapshots else {
            return;
        };

        // Best-effort: a failed save must not fail the mutation
        if let Err(e) = snapshots.save(&self.projects) {
            warn!("Failed to persist {} project(s): {}", self.projects.len(), e);
        }
    }

    fn notify(&mut self) {
        let snapshot = self.projects.clone();

        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
