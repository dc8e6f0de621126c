//! The synchronization engine: the owned service object collaborators hold.
//!
//! `attach` establishes the filesystem watch, spawns the worker task, and
//! kicks off the initial full load. Collaborators query the catalog through
//! the engine and subscribe to its change notifications; nothing else may
//! mutate the catalog.

use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard};

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::catalog::{Catalog, TableDef};
use crate::observability::Logger;
use crate::watcher::{GlobWatcher, PatternFilter};

use super::config::WatchConfig;
use super::errors::SyncResult;
use super::ops;
use super::worker::Worker;

/// Buffered change notifications per subscriber. Payloads are namespace
/// strings, so buffering is cheap and lagging subscribers only miss
/// notifications, never state.
const CHANGE_CHANNEL_CAPACITY: usize = 256;

/// A live, queryable catalog of schema definitions, synchronized with the
/// filesystem.
///
/// Must be created inside a tokio runtime. Dropping the engine stops the
/// watch; `shutdown` does so explicitly and waits for the worker to drain.
/// The catalog is never persisted: it is rebuilt from the files on every
/// attach.
pub struct SyncEngine {
    catalog: Arc<RwLock<Catalog>>,
    changes: broadcast::Sender<String>,
    // Receiver created before the worker starts, so the first subscriber
    // observes the startup-scan notifications. Handed out once.
    initial: Mutex<Option<broadcast::Receiver<String>>>,
    watcher: GlobWatcher,
    worker: JoinHandle<()>,
}

impl SyncEngine {
    /// Validates the configuration, starts the watcher, and spawns the
    /// worker task that performs the initial full load and then applies
    /// watcher events one at a time.
    ///
    /// An invalid pattern, an invalid naming expression, or a failure to
    /// establish the watch is startup-fatal and returned here.
    pub fn attach(config: WatchConfig) -> SyncResult<Self> {
        let resolver = ops::build_resolver(&config)?;
        let filter = PatternFilter::new(&config.root, &config.pattern)?;

        // Watch before the initial scan so no change is missed in between;
        // duplicate triggers are safe because every load unloads first.
        let (sender, receiver) = mpsc::unbounded_channel();
        let watcher = GlobWatcher::start(filter.clone(), sender)?;

        let catalog = Arc::new(RwLock::new(Catalog::new()));
        // The receiver is reserved for the first subscriber; it must exist
        // before the worker task can emit its startup-scan notifications,
        // which are otherwise dropped by a receiver-less broadcast channel.
        let (changes, initial) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        let worker = Worker {
            catalog: Arc::clone(&catalog),
            resolver,
            filter,
            changes: changes.clone(),
        };
        let worker = tokio::spawn(worker.run(receiver));

        Logger::info(
            "WATCH_STARTED",
            &[
                ("root", &config.root.display().to_string()),
                ("pattern", config.pattern.as_str()),
            ],
        );

        Ok(Self {
            catalog,
            changes,
            initial: Mutex::new(Some(initial)),
            watcher,
            worker,
        })
    }

    /// Subscribes to change notifications: one namespace string per
    /// completed load or unload. Ordered per namespace; cross-namespace
    /// ordering is unspecified.
    ///
    /// The first subscription receives the notifications buffered since
    /// attach, including those of the startup scan; later subscriptions
    /// start from the present.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        let reserved = self
            .initial
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match reserved {
            Some(receiver) => receiver,
            None => self.changes.subscribe(),
        }
    }

    // The worker is the sole writer; a poisoned lock only means it panicked
    // mid-mutation, and the catalog stays readable.
    fn read_catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the full catalog, or only the records of one namespace.
    pub fn collection(&self, namespace: Option<&str>) -> Vec<TableDef> {
        let catalog = self.read_catalog();
        match namespace {
            Some(ns) => catalog.by_namespace(ns).into_iter().cloned().collect(),
            None => catalog.all().to_vec(),
        }
    }

    /// Finds a table by name, case-insensitively; first match wins.
    pub fn table(&self, name: &str) -> Option<TableDef> {
        self.read_catalog().find_table(name).cloned()
    }

    /// Number of table records currently in the catalog.
    pub fn table_count(&self) -> usize {
        self.read_catalog().len()
    }

    /// Stops the watch and waits for the worker to finish the event it is
    /// processing. The catalog is not cleared; it is simply discarded with
    /// the engine.
    pub async fn shutdown(self) {
        // Dropping the watch handle closes the event channel; the worker
        // exits once it has drained what was already queued.
        drop(self.watcher);
        let _ = self.worker.await;
        Logger::info("WATCH_STOPPED", &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::SyncError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_attach_rejects_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        let result = SyncEngine::attach(WatchConfig::new(dir.path(), "["));
        assert!(matches!(result, Err(SyncError::WatcherSetup(_))));
    }

    #[tokio::test]
    async fn test_attach_rejects_invalid_name_regex() {
        let dir = TempDir::new().unwrap();
        let config = WatchConfig::new(dir.path(), "**/*.def").with_name_regex("(unclosed");
        let result = SyncEngine::attach(config);
        assert!(matches!(result, Err(SyncError::InvalidNameRegex { .. })));
    }

    #[tokio::test]
    async fn test_attach_rejects_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let result = SyncEngine::attach(WatchConfig::new(&missing, "**/*.def"));
        assert!(matches!(result, Err(SyncError::WatcherSetup(_))));
    }

    #[tokio::test]
    async fn test_first_subscriber_receives_buffered_scan_notifications() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("Sales.def"),
            r#"[ { "label": "Orders" } ]"#,
        )
        .unwrap();

        let config =
            WatchConfig::new(dir.path(), "**/*.def").with_name_regex(r"([^/\\]+)\.def$");
        let engine = SyncEngine::attach(config).unwrap();

        // Let the worker finish the scan before anyone subscribes.
        let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(10);
        while engine.table_count() < 1 {
            assert!(tokio::time::Instant::now() < deadline, "scan did not complete");
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }

        // The first subscriber still observes the scan's notifications.
        let mut first = engine.subscribe();
        assert_eq!(first.recv().await.unwrap(), "sales");

        // A later subscriber starts from the present.
        let mut second = engine.subscribe();
        assert!(matches!(
            second.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));

        engine.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_root_yields_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let engine = SyncEngine::attach(WatchConfig::new(dir.path(), "**/*.def")).unwrap();

        // Give the worker a moment to complete the (empty) scan.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        assert_eq!(engine.table_count(), 0);
        assert!(engine.collection(None).is_empty());
        assert!(engine.table("anything").is_none());
        engine.shutdown().await;
    }
}
