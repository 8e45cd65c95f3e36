
use crate::Listener;

use tb_core::Project;
use tb_storage::{Result as StorageErrorResult, SnapshotStore, StorageError};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Snapshot slot double backed by shared memory, so tests can inspect what
/// the store persisted
pub(crate) struct StubSnapshotStore {
    slot: Rc<RefCell<Vec<Project>>>,
    saves: Rc<Cell<usize>>,
}

impl StubSnapshotStore {
    pub(crate) fn empty() -> (Self, Rc<RefCell<Vec<Project>>>, Rc<Cell<usize>>) {
        Self::seeded(Vec::new())
    }

    pub(crate) fn seeded(
        projects: Vec<Project>,
    ) -> (Self, Rc<RefCell<Vec<Project>>>, Rc<Cell<usize>>) {
        let slot = Rc::new(RefCell::new(projects));
        let saves = Rc::new(Cell::new(0));
        let stub = Self {
            slot: Rc::clone(&slot),
            saves: Rc::clone(&saves),
        };
        (stub, slot, saves)
    }
}

impl SnapshotStore for StubSnapshotStore {
    fn load(&self) -> Vec<Project> {
        self.slot.borrow().clone()
    }

    fn save(&self, projects: &[Project]) -> StorageErrorResult<()> {
        *self.slot.borrow_mut() = projects.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// Snapshot slot whose saves always fail
pub(crate) struct FailingSnapshotStore;

impl SnapshotStore for FailingSnapshotStore {
    fn load(&self) -> Vec<Project> {
        Vec::new()
    }

    fn save(&self, _projects: &[Project]) -> StorageErrorResult<()> {
        Err(StorageError::encode("slot unavailable"))
    }
}

/// Listener that appends every delivered snapshot to a shared log
pub(crate) fn recording_listener() -> (Listener, Rc<RefCell<Vec<Vec<Project>>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let listener: Listener = Box::new(move |projects: &[Project]| {
        sink.borrow_mut().push(projects.to_vec());
    });
    (listener, log)
}
