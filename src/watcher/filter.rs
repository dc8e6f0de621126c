//! Glob filtering of watched paths.
//!
//! The same filter decides which paths the initial scan enumerates and which
//! watcher events reach the synchronization engine, so both pipelines see an
//! identical set of files.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use super::errors::{WatchError, WatchResult};

/// Matches paths under a root directory against a file-name glob.
#[derive(Debug, Clone)]
pub struct PatternFilter {
    root: PathBuf,
    matcher: GlobMatcher,
}

impl PatternFilter {
    /// Compiles the file-name pattern for the given root.
    ///
    /// An invalid glob is a setup failure surfaced to the caller of
    /// `SyncEngine::attach`.
    pub fn new(root: &Path, pattern: &str) -> WatchResult<Self> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(false)
            .build()
            .map_err(|source| WatchError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            root: root.to_path_buf(),
            matcher: glob.compile_matcher(),
        })
    }

    /// Returns the watch root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns true when the path matches the configured pattern.
    ///
    /// Patterns are written relative to the root; absolute event paths are
    /// rebased before matching.
    pub fn matches(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.matcher.is_match(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_relative_to_root() {
        let filter = PatternFilter::new(Path::new("/data"), "**/*.def").unwrap();
        assert!(filter.matches(Path::new("/data/schemas/sales.def")));
        assert!(filter.matches(Path::new("/data/sales.def")));
        assert!(!filter.matches(Path::new("/data/schemas/sales.json")));
    }

    #[test]
    fn test_path_outside_root_matched_as_is() {
        let filter = PatternFilter::new(Path::new("/data"), "**/*.def").unwrap();
        assert!(filter.matches(Path::new("/elsewhere/sales.def")));
    }

    #[test]
    fn test_invalid_glob_is_setup_error() {
        let result = PatternFilter::new(Path::new("/data"), "[");
        assert!(matches!(result, Err(WatchError::InvalidPattern { .. })));
    }
}
