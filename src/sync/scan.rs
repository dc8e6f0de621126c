//! One-shot catalog build, without a resident watcher.
//!
//! Enumerates and loads every matching file once and returns the resulting
//! records. Per-file read and parse failures follow the engine's policy:
//! logged and skipped, never fatal.

use crate::catalog::TableDef;
use crate::observability::Logger;
use crate::watcher::PatternFilter;

use super::config::WatchConfig;
use super::errors::SyncResult;
use super::ops;

/// Loads all matching schema-definition files once.
///
/// Setup errors (invalid pattern or naming expression) are returned;
/// per-file failures are logged and the file skipped.
pub async fn scan_once(config: &WatchConfig) -> SyncResult<Vec<TableDef>> {
    let resolver = ops::build_resolver(config)?;
    let filter = PatternFilter::new(&config.root, &config.pattern)?;

    let mut records = Vec::new();
    for path in ops::enumerate(&filter) {
        match ops::parse_file(&resolver, &path).await {
            Ok((_, tables)) => records.extend(tables),
            Err(error) => {
                Logger::error(
                    "CATALOG_LOAD_FAILED",
                    &[
                        ("path", &path.display().to_string()),
                        ("error", &error.to_string()),
                    ],
                );
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_scan_once_collects_all_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("Sales.def"),
            r#"[ { "label": "Orders" } ]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("Stock.def"),
            r#"[ { "label": "Items" }, { "label": "Bins" } ]"#,
        )
        .unwrap();

        let config = WatchConfig::new(dir.path(), "**/*.def")
            .with_name_regex(r"([^/\\]+)\.def$");
        let records = scan_once(&config).await.unwrap();

        assert_eq!(records.len(), 3);
        assert!(records.iter().any(|t| t.namespace == "sales"));
        assert!(records.iter().any(|t| t.namespace == "stock"));
    }

    #[tokio::test]
    async fn test_scan_once_skips_unparseable_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Good.def"), r#"[ { "label": "Ok" } ]"#).unwrap();
        std::fs::write(dir.path().join("Bad.def"), "not json").unwrap();

        let config = WatchConfig::new(dir.path(), "**/*.def");
        let records = scan_once(&config).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ok");
    }
}
