use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] tb_config::ConfigError),

    #[error("{0}")]
    Core(#[from] tb_core::CoreError),

    #[error("Not a project id: {value}")]
    InvalidProjectId { value: String },

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
