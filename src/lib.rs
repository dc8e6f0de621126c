//! dbdict - a live, queryable catalog of database schema definitions
//!
//! Schema-definition files on disk are parsed into normalized table records
//! and held in an in-memory catalog that stays synchronized with filesystem
//! changes. Collaborators query the catalog and subscribe to per-namespace
//! change notifications; the synchronization engine is the only mutator.

pub mod catalog;
pub mod cli;
pub mod observability;
pub mod sync;
pub mod watcher;
