//! Synchronization subsystem.
//!
//! The engine that keeps the in-memory catalog aligned with the
//! schema-definition files on disk: startup enumeration, incremental
//! load/unload driven by watcher events, and per-namespace change
//! notifications.

mod config;
mod engine;
mod errors;
mod ops;
mod scan;
mod worker;

pub use config::WatchConfig;
pub use engine::SyncEngine;
pub use errors::{SyncError, SyncResult};
pub use scan::scan_once;
