use tb_core::{Project, ProjectStatus, RenderedList, reconcile};

use std::fmt;

use uuid::Uuid;

/// One status column of the board.
///
/// Subscribes to store snapshots, filters them down to its status, and
/// patches its rendered rows through the reconciler instead of rebuilding
/// the whole list.
pub struct ColumnView {
    status: ProjectStatus,
    rows: Vec<ColumnRow>,
}

struct ColumnRow {
    id: Uuid,
    line: String,
}

impl ColumnView {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            rows: Vec::new(),
        }
    }

    /// Listener body: recompute this column's subset and reconcile
    pub fn apply_snapshot(&mut self, projects: &[Project]) {
        let assigned: Vec<Project> = projects
            .iter()
            .filter(|project| project.status == self.status)
            .cloned()
            .collect();

        reconcile(self, &assigned);
    }

    fn format_row(project: &Project) -> String {
        format!(
            "{}  {} | {} assigned | {}",
            project.id,
            project.title,
            persons(project.people),
            project.description
        )
    }
}

fn persons(people: i64) -> String {
    if people == 1 {
        String::from("1 person")
    } else {
        format!("{} persons", people)
    }
}

impl RenderedList for ColumnView {
    fn rendered_ids(&self) -> Vec<Uuid> {
        self.rows.iter().map(|row| row.id).collect()
    }

    fn insert(&mut self, project: &Project) {
        self.rows.push(ColumnRow {
            id: project.id,
            line: Self::format_row(project),
        });
    }

    fn remove(&mut self, id: Uuid) {
        self.rows.retain(|row| row.id != id);
    }
}

impl fmt::Display for ColumnView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} PROJECTS", self.status.as_str().to_uppercase())?;

        for row in &self.rows {
            writeln!(f, "  {}", row.line)?;
        }

        Ok(())
    }
}
