//! Normalized schema record types.
//!
//! One `TableDef` describes one table as read from a schema-definition file,
//! with its key flags already derived:
//! - a field is a primary field when a primary index lists its name
//! - a field is a key field when any index lists its name

use serde::{Deserialize, Serialize};

/// One index declared on a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDef {
    /// Index name
    pub name: String,
    /// Whether this is the primary index
    pub is_pk: bool,
    /// Whether the index enforces uniqueness
    pub is_unique: bool,
    /// Member field names, source order preserved
    pub fields: Vec<String>,
}

impl IndexDef {
    /// Returns true when the index lists the given field name.
    ///
    /// Membership is an exact, case-sensitive match against the field label
    /// as it appears in the source file.
    pub fn contains_field(&self, field_name: &str) -> bool {
        self.fields.iter().any(|f| f == field_name)
    }
}

/// One field declared on a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name
    pub name: String,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Data type tag as declared in the source file
    pub data_type: String,
    /// Whether a value is mandatory
    pub mandatory: bool,
    /// Optional display format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Derived: member of the primary index
    pub is_pk: bool,
    /// Derived: member of at least one index
    pub is_key: bool,
}

/// One table record, owned by a schema namespace.
///
/// Records are created by loading one schema-definition file (a file holds a
/// list of tables) and destroyed in bulk when their namespace is unloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    /// Owning schema namespace, always lower-cased by the resolver
    pub namespace: String,
    /// Table name; lookup identity, compared case-insensitively
    pub name: String,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fields, source order preserved
    pub fields: Vec<FieldDef>,
    /// Indexes, source order preserved
    pub indexes: Vec<IndexDef>,
}

impl TableDef {
    /// Case-insensitive name comparison used for table lookup.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns the field with the given name, if declared.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the primary index, if one is declared.
    pub fn primary_index(&self) -> Option<&IndexDef> {
        self.indexes.iter().find(|i| i.is_pk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TableDef {
        TableDef {
            namespace: "sales".into(),
            name: "Orders".into(),
            description: Some("Order header".into()),
            fields: vec![FieldDef {
                name: "OrderId".into(),
                description: None,
                data_type: "integer".into(),
                mandatory: true,
                format: None,
                is_pk: true,
                is_key: true,
            }],
            indexes: vec![IndexDef {
                name: "PK_Orders".into(),
                is_pk: true,
                is_unique: true,
                fields: vec!["OrderId".into()],
            }],
        }
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let table = sample_table();
        assert!(table.matches_name("orders"));
        assert!(table.matches_name("ORDERS"));
        assert!(!table.matches_name("order"));
    }

    #[test]
    fn test_index_membership_is_case_sensitive() {
        let table = sample_table();
        let pk = table.primary_index().unwrap();
        assert!(pk.contains_field("OrderId"));
        assert!(!pk.contains_field("orderid"));
    }

    #[test]
    fn test_field_lookup() {
        let table = sample_table();
        assert!(table.field("OrderId").is_some());
        assert!(table.field("Missing").is_none());
    }
}
