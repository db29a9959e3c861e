//! CLI error types.

use thiserror::Error;
use vesting_models::ledger::LedgerError;
use vesting_models::schedules::ScheduleError;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file was not found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An argument value was not usable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A grant referenced on the command line does not exist.
    #[error("No grant with id {0}")]
    UnknownGrant(u64),

    /// One or more grants failed validation.
    #[error("{failed} of {total} grants failed validation")]
    ValidationFailed {
        /// Grants that failed.
        failed: usize,
        /// Grants checked.
        total: usize,
    },

    /// Ledger or regeneration failure.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Schedule configuration failure.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Grant or price file could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// CSV output failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
