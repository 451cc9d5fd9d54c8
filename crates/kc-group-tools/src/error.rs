//! CLI error types.

use kc_admin_client::AdminError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Admin API error.
    #[error(transparent)]
    Admin(#[from] AdminError),

    /// The group the run operates on does not exist.
    #[error("Group name {name} not found")]
    GroupNotFound {
        /// Group name given on the command line.
        name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
