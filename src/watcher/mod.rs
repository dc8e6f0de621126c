//! Filesystem watcher subsystem.
//!
//! A glob-filtered change watcher over a root directory. Matching create,
//! modify, and delete events are forwarded as `FileEvent`s; the
//! synchronization engine consumes them one at a time.

mod errors;
mod filter;
mod watch;

pub use errors::{WatchError, WatchResult};
pub use filter::PatternFilter;
pub use watch::{FileEvent, GlobWatcher};
