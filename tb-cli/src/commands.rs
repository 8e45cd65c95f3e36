use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a project card to the active column
    Add {
        /// Project title
        title: String,
        /// Short description
        description: String,
        /// Number of people assigned
        people: i64,
    },
    /// Move a project to another column
    Move {
        /// Project ID
        id: String,
        /// Target column: active or finished
        status: String,
    },
    /// Delete a project
    Delete {
        /// Project ID
        id: String,
    },
    /// Render both columns of the board
    Board,
    /// List every project with its raw fields
    List,
}
