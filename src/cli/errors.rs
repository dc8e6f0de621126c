//! CLI-specific error types.
//!
//! All CLI errors are fatal: main prints them to stderr and exits non-zero.

use thiserror::Error;

use crate::sync::SyncError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine setup or scan failure
    #[error(transparent)]
    Sync(#[from] SyncError),

    /// Runtime construction or signal handling failure
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    /// Catalog output could not be serialized
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
