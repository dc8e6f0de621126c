//! Observability subsystem.
//!
//! Structured JSON logging only. Logging is read-only with respect to the
//! catalog, has no side effects on synchronization, and must never crash the
//! engine: write failures are swallowed.

mod logger;

pub use logger::{Logger, Severity};
