use crate::commands::Commands;

use clap::Parser;

/// Task board command-line interface
#[derive(Parser)]
#[command(name = "tb", version, about = "Manage the task board from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
