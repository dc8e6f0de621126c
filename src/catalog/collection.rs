//! The in-memory catalog: an ordered collection of table records.
//!
//! All mutation funnels through the synchronization engine; queries read the
//! live collection order. Insertion never deduplicates, because every load
//! purges the file's namespace first.

use super::types::TableDef;

/// Ordered collection of table records, grouped logically by namespace.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<TableDef>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends records to the end of the collection.
    ///
    /// Does not check for duplicate table names; callers unload the owning
    /// namespace before re-inserting.
    pub fn insert(&mut self, records: Vec<TableDef>) {
        self.records.extend(records);
    }

    /// Removes every record owned by the given namespace.
    ///
    /// Namespaces are compared by exact string equality (the resolver has
    /// already lower-cased them). Returns the number of records removed;
    /// zero when the namespace was absent.
    pub fn remove_namespace(&mut self, namespace: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.namespace != namespace);
        before - self.records.len()
    }

    /// Returns every record in collection order.
    pub fn all(&self) -> &[TableDef] {
        &self.records
    }

    /// Returns the records owned by the given namespace, collection order.
    pub fn by_namespace(&self, namespace: &str) -> Vec<&TableDef> {
        self.records
            .iter()
            .filter(|r| r.namespace == namespace)
            .collect()
    }

    /// Finds a table by name, case-insensitively.
    ///
    /// Returns the first match in collection order; table names are not
    /// required to be unique across namespaces.
    pub fn find_table(&self, name: &str) -> Option<&TableDef> {
        self.records.iter().find(|r| r.matches_name(name))
    }

    /// Returns the number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
