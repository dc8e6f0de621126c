//! Watcher error types.

use thiserror::Error;

/// Result type for watcher operations.
pub type WatchResult<T> = Result<T, WatchError>;

/// Errors raised while establishing a filesystem watch.
///
/// All of these are startup-fatal: they surface from `SyncEngine::attach`
/// and the engine never starts. Once a watch is established, event delivery
/// problems are logged and skipped, never fatal.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The configured file-name pattern is not a valid glob
    #[error("invalid file-name pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Underlying glob compilation error
        #[source]
        source: globset::Error,
    },

    /// The watch root could not be observed
    #[error("cannot watch '{root}': {source}")]
    WatchFailed {
        /// The root directory the watch was bound to
        root: String,
        /// Underlying watcher error
        #[source]
        source: notify::Error,
    },
}
