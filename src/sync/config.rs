//! Engine configuration.

use std::path::{Path, PathBuf};

/// Configuration supplied to `SyncEngine::attach`.
///
/// The pattern selects which files under the root are schema-definition
/// files; the optional naming expression extracts the namespace from a file
/// path (capture group 1). Both are validated at attach time.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Directory observed recursively
    pub root: PathBuf,
    /// File-name glob, relative to the root (e.g. `**/*.def`)
    pub pattern: String,
    /// Optional namespace-naming expression; group 1 is the namespace
    pub name_regex: Option<String>,
}

impl WatchConfig {
    /// Configuration with no naming expression: namespaces fall back to the
    /// lower-cased file path.
    pub fn new(root: impl AsRef<Path>, pattern: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            pattern: pattern.into(),
            name_regex: None,
        }
    }

    /// Sets the namespace-naming expression.
    pub fn with_name_regex(mut self, name_regex: impl Into<String>) -> Self {
        self.name_regex = Some(name_regex.into());
        self
    }
}
