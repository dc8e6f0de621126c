//! Shared pieces of the load pipeline.
//!
//! Used by both the resident worker and the one-shot scan: configuration
//! validation, file enumeration, and the read-parse-map step for a single
//! schema-definition file.

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::catalog::{map_tables, NamespaceResolver, RawTable, TableDef};
use crate::watcher::PatternFilter;

use super::config::WatchConfig;
use super::errors::{SyncError, SyncResult};

/// Compiles the configured naming expression into a resolver.
pub(super) fn build_resolver(config: &WatchConfig) -> SyncResult<NamespaceResolver> {
    let name_regex = match &config.name_regex {
        Some(pattern) => {
            Some(Regex::new(pattern).map_err(|source| SyncError::InvalidNameRegex {
                pattern: pattern.clone(),
                source,
            })?)
        }
        None => None,
    };
    Ok(NamespaceResolver::new(name_regex))
}

/// Enumerates every file under the root matching the pattern.
pub(super) fn enumerate(filter: &PatternFilter) -> Vec<PathBuf> {
    WalkDir::new(filter.root())
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| filter.matches(path))
        .collect()
}

/// Reads and parses one schema-definition file into its namespace and
/// normalized table records. Read and parse failures abort the whole file;
/// there is no partial per-table result.
pub(super) async fn parse_file(
    resolver: &NamespaceResolver,
    path: &Path,
) -> SyncResult<(String, Vec<TableDef>)> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SyncError::Read {
            path: path.display().to_string(),
            source,
        })?;
    let raw: Vec<RawTable> = serde_json::from_str(&text).map_err(|source| SyncError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    let namespace = resolver.resolve(&path.to_string_lossy());
    let tables = map_tables(&namespace, raw);
    Ok((namespace, tables))
}
