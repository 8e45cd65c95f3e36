//! tb - task board CLI
//!
//! Adds project cards, moves them between the active and finished columns,
//! and renders the board from the persisted snapshot.
//!
//! # Examples
//!
//! ```bash
//! # Add a card to the active column
//! tb add "Onboarding" "Bring the new folks up to speed" 3
//!
//! # Render both columns
//! tb board
//!
//! # Move a card (the id is the drag payload)
//! tb move 3f2504e0-4f89-41d3-9a0c-0305e82c3301 finished
//! ```

mod cli;
mod column_view;
mod commands;
mod error;
mod logger;
mod project_draft;


use crate::cli::Cli;
use crate::column_view::ColumnView;
use crate::commands::Commands;
use crate::error::{CliError, Result as CliErrorResult};
use crate::project_draft::ProjectDraft;

use tb_config::Config;
use tb_core::ProjectStatus;
use tb_state::{DragPayload, ProjectStore};
use tb_storage::FileSnapshotStore;

use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;
use std::str::FromStr;

use clap::Parser;
use log::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config) -> CliErrorResult<()> {
    let storage_dir = config.storage_dir()?;
    let snapshots = FileSnapshotStore::new(storage_dir);
    let mut store = ProjectStore::with_snapshot_store(Box::new(snapshots));

    match cli.command {
        Commands::Add {
            title,
            description,
            people,
        } => {
            let draft = ProjectDraft::gather(&title, &description, people, &config.validation)?;

            store.init();
            let id = store.add_project(draft.title, draft.description, draft.people);
            info!("Added project {}", id);
            println!("{id}");
        }

        Commands::Move { id, status } => {
            let payload = parse_payload(&id)?;
            let status = ProjectStatus::from_str(&status)?;

            store.init();
            store.move_project(payload.id(), status);
        }

        Commands::Delete { id } => {
            let payload = parse_payload(&id)?;

            store.init();
            store.delete_project(payload.id());
        }

        Commands::List => {
            store.init();
            for project in store.projects() {
                println!(
                    "{}  {}  {}  {} people  {}",
                    project.id, project.status, project.title, project.people, project.description
                );
            }
        }

        Commands::Board => {
            render_board(store);
        }
    }

    Ok(())
}

/// The drop target reads the dragged id back as plain text
fn parse_payload(text: &str) -> CliErrorResult<DragPayload> {
    DragPayload::from_plain_text(text).ok_or_else(|| CliError::InvalidProjectId {
        value: text.to_string(),
    })
}

/// Column views subscribe first, then the store loads its snapshot and each
/// column reconciles itself from the notification.
fn render_board(mut store: ProjectStore) {
    let columns = [
        Rc::new(RefCell::new(ColumnView::new(ProjectStatus::Active))),
        Rc::new(RefCell::new(ColumnView::new(ProjectStatus::Finished))),
    ];

    for column in &columns {
        let column = Rc::clone(column);
        store.subscribe(Box::new(move |projects| {
            column.borrow_mut().apply_snapshot(projects);
        }));
    }

    store.init();

    for column in &columns {
        print!("{}", column.borrow());
    }
}
