//! Schema catalog subsystem.
//!
//! The normalized data model for schema-definition files, the pure mapper
//! that produces it, the namespace resolver, and the in-memory collection
//! the synchronization engine maintains.

mod collection;
mod mapper;
mod namespace;
mod types;

pub use collection::Catalog;
pub use mapper::{map_tables, RawField, RawIndex, RawIndexField, RawTable};
pub use namespace::NamespaceResolver;
pub use types::{FieldDef, IndexDef, TableDef};
