//! Synchronization error types.

use thiserror::Error;

use crate::watcher::WatchError;

/// Result type for synchronization operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors raised by the synchronization engine.
///
/// Setup errors (`WatcherSetup`, `InvalidNameRegex`) surface from
/// `SyncEngine::attach` and are fatal to startup. Per-file errors (`Read`,
/// `Parse`) abort only that file's load: the failure is logged, the file's
/// namespace stays empty, and the engine keeps watching. A later filesystem
/// event re-triggers the load; there are no automatic retries.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The file could not be read (missing or unreadable at read time)
    #[error("cannot read '{path}': {source}")]
    Read {
        /// The file the load was triggered for
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid schema-definition list
    #[error("cannot parse '{path}': {source}")]
    Parse {
        /// The file the load was triggered for
        path: String,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// The filesystem watch could not be established
    #[error(transparent)]
    WatcherSetup(#[from] WatchError),

    /// The configured namespace-naming expression is not a valid regex
    #[error("invalid namespace expression '{pattern}': {source}")]
    InvalidNameRegex {
        /// The offending expression
        pattern: String,
        /// Underlying regex compilation error
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_the_path() {
        let err = SyncError::Read {
            path: "schemas/sales.def".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("schemas/sales.def"));
    }

    #[test]
    fn test_parse_error_names_the_path() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = SyncError::Parse {
            path: "schemas/sales.def".into(),
            source,
        };
        assert!(err.to_string().starts_with("cannot parse"));
    }
}
