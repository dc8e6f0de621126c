//! The single-mutator worker behind the synchronization engine.
//!
//! One worker task owns all catalog mutation. It first enumerates every
//! matching file under the root and loads each, then processes watcher
//! events one at a time. Because events are handled strictly in sequence,
//! operations against the same namespace always complete in trigger order.
//!
//! Every load begins with an unload of the file's namespace, so re-loading
//! an edited file never duplicates records, and both the startup scan and a
//! concurrent watcher event for the same file are safe to process.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::{broadcast, mpsc};

use crate::catalog::{Catalog, NamespaceResolver};
use crate::observability::Logger;
use crate::watcher::{FileEvent, PatternFilter};

use super::ops;

pub(super) struct Worker {
    pub(super) catalog: Arc<RwLock<Catalog>>,
    pub(super) resolver: NamespaceResolver,
    pub(super) filter: PatternFilter,
    pub(super) changes: broadcast::Sender<String>,
}

impl Worker {
    /// Runs the initial scan, then drains watcher events until every sender
    /// is gone (the watch handle was dropped at shutdown).
    pub(super) async fn run(self, mut events: mpsc::UnboundedReceiver<FileEvent>) {
        self.scan().await;
        while let Some(event) = events.recv().await {
            match event {
                FileEvent::Changed(path) => self.load(&path).await,
                FileEvent::Removed(path) => self.unload(&path),
            }
        }
    }

    /// Enumerates all files matching the pattern and loads each one.
    async fn scan(&self) {
        let paths = ops::enumerate(&self.filter);
        let count = paths.len();
        for path in paths {
            self.load(&path).await;
        }
        Logger::info("CATALOG_SCAN_COMPLETE", &[("files", &count.to_string())]);
    }

    /// Loads one file: unload its namespace, re-read, re-parse, re-insert.
    ///
    /// On a read or parse failure the load aborts; the preceding unload has
    /// already reverted the namespace and notified subscribers, so a failed
    /// load adds no notification of its own.
    pub(super) async fn load(&self, path: &Path) {
        self.unload(path);
        match ops::parse_file(&self.resolver, path).await {
            Ok((namespace, tables)) => {
                let count = tables.len();
                // Sole writer: a poisoned lock is recovered, never a silent
                // skip that would misreport the count below.
                self.catalog
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(tables);
                Logger::info(
                    "CATALOG_LOAD",
                    &[
                        ("namespace", namespace.as_str()),
                        ("path", &path.display().to_string()),
                        ("tables", &count.to_string()),
                    ],
                );
                let _ = self.changes.send(namespace);
            }
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

    /// Unloads one file's namespace and notifies subscribers
    /// unconditionally, even when nothing was removed.
    pub(super) fn unload(&self, path: &Path) {
        let namespace = self.resolver.resolve(&path.to_string_lossy());
        let removed = self
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove_namespace(&namespace);
        if removed > 0 {
            Logger::info(
                "CATALOG_UNLOAD",
                &[
                    ("namespace", namespace.as_str()),
                    ("tables", &removed.to_string()),
                ],
            );
        }
        let _ = self.changes.send(namespace);
    }
}
