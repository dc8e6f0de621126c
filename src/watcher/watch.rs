//! Filesystem change watcher.
//!
//! Observes a root directory recursively, filters events through the
//! configured file-name pattern, and forwards per-file events into the
//! synchronization engine's channel. The watcher holds no schema state; it
//! is purely an event source.

use std::path::PathBuf;

use notify::{recommended_watcher, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::observability::Logger;

use super::errors::{WatchError, WatchResult};
use super::filter::PatternFilter;

/// A per-file event delivered to the synchronization engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEvent {
    /// The file was created or its content changed; reload it.
    Changed(PathBuf),
    /// The file was removed; unload its namespace.
    Removed(PathBuf),
}

/// Watches the root directory and forwards matching events.
///
/// Dropping the watcher releases the watch handle; the engine owns exactly
/// one instance and drops it at shutdown.
pub struct GlobWatcher {
    // Held for its Drop impl; the watch stops when this is released.
    _watcher: RecommendedWatcher,
}

impl GlobWatcher {
    /// Establishes the watch and begins forwarding events.
    ///
    /// Event classification: create and modify events for a matching path
    /// become `Changed` when the path still exists, `Removed` otherwise
    /// (covers renames away from the pattern); remove events become
    /// `Removed`. Everything else is ignored.
    pub fn start(
        filter: PatternFilter,
        sender: mpsc::UnboundedSender<FileEvent>,
    ) -> WatchResult<Self> {
        let root = filter.root().to_path_buf();

        let mut watcher = recommended_watcher(move |result: Result<Event, notify::Error>| {
            let event = match result {
                Ok(event) => event,
                Err(error) => {
                    Logger::warn("WATCH_EVENT_ERROR", &[("error", &error.to_string())]);
                    return;
                }
            };
            for file_event in classify(&filter, event) {
                // Send fails only when the engine is shutting down.
                if sender.send(file_event).is_err() {
                    return;
                }
            }
        })
        .map_err(|source| WatchError::WatchFailed {
            root: root.display().to_string(),
            source,
        })?;

        watcher
            .watch(&root, RecursiveMode::Recursive)
            .map_err(|source| WatchError::WatchFailed {
                root: root.display().to_string(),
                source,
            })?;

        Ok(Self { _watcher: watcher })
    }
}

/// Turns one notify event into zero or more file events.
fn classify(filter: &PatternFilter, event: Event) -> Vec<FileEvent> {
    let removed = match event.kind {
        EventKind::Remove(_) => true,
        EventKind::Create(_) | EventKind::Modify(_) => false,
        _ => return Vec::new(),
    };

    event
        .paths
        .into_iter()
        .filter(|path| filter.matches(path))
        .map(|path| {
            if removed || !path.exists() {
                FileEvent::Removed(path)
            } else {
                FileEvent::Changed(path)
            }
        })
        .collect()
}
