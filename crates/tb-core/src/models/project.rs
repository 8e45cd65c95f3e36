//! Project entity - a single card tracked on the board.

use crate::ProjectStatus;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project card. Ids are generated at creation time and never change;
/// field order matches the persisted snapshot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Number of people assigned, kept within the configured bounds by the caller
    pub people: i64,
    pub status: ProjectStatus,
}

impl Project {
    /// Create a new project with a fresh id in the Active column
    pub fn new(title: String, description: String, people: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Check if the project sits in the Finished column
    pub fn is_finished(&self) -> bool {
        self.status == ProjectStatus::Finished
    }
}
