//! Mapping from raw on-disk descriptors to normalized table records.
//!
//! Schema-definition files hold a JSON list of loosely-shaped table
//! descriptors. Deserialization into the `Raw*` types is the structural
//! validation boundary: a malformed item fails the whole file, never a
//! partial mapping. Absent `fields` and `indexes` substructures are accepted
//! as empty lists; a descriptor carrying them must shape them correctly.
//! The mapping itself is a pure transformation with the key flags derived
//! from index membership.

use serde::Deserialize;

use super::types::{FieldDef, IndexDef, TableDef};

/// One table descriptor as it appears in a schema-definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTable {
    /// Table name
    pub label: String,
    /// Optional description
    #[serde(default)]
    pub detail: Option<String>,
    /// Field descriptors, source order
    #[serde(default)]
    pub fields: Vec<RawField>,
    /// Index descriptors, source order
    #[serde(default)]
    pub indexes: Vec<RawIndex>,
}

/// One field descriptor within a table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    /// Field name
    pub label: String,
    /// Optional description
    #[serde(default)]
    pub detail: Option<String>,
    /// Data type tag
    pub data_type: String,
    /// Whether a value is mandatory; absent means false
    #[serde(default)]
    pub mandatory: bool,
    /// Optional display format
    #[serde(default)]
    pub format: Option<String>,
}

/// One index descriptor within a table.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIndex {
    /// Index name
    pub label: String,
    /// Whether this is the primary index; absent means false
    #[serde(default)]
    pub primary: bool,
    /// Whether the index enforces uniqueness; absent means false
    #[serde(default)]
    pub unique: bool,
    /// Member fields, source order
    #[serde(default)]
    pub fields: Vec<RawIndexField>,
}

/// A field reference inside an index descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIndexField {
    /// Referenced field name
    pub label: String,
}

/// Maps one file's raw descriptors into table records owned by `namespace`.
///
/// Indexes are mapped before fields so that the PK and key flags can be
/// derived from the finished index list. Input order is preserved for
/// tables, fields, and index members alike.
pub fn map_tables(namespace: &str, raw: Vec<RawTable>) -> Vec<TableDef> {
    raw.into_iter()
        .map(|table| {
            let indexes: Vec<IndexDef> = table
                .indexes
                .into_iter()
                .map(|index| IndexDef {
                    name: index.label,
                    is_pk: index.primary,
                    is_unique: index.unique,
                    fields: index.fields.into_iter().map(|f| f.label).collect(),
                })
                .collect();

            let fields: Vec<FieldDef> = table
                .fields
                .into_iter()
                .map(|field| {
                    let is_pk = indexes
                        .iter()
                        .any(|i| i.is_pk && i.contains_field(&field.label));
                    let is_key = indexes.iter().any(|i| i.contains_field(&field.label));
                    FieldDef {
                        name: field.label,
                        description: field.detail,
                        data_type: field.data_type,
                        mandatory: field.mandatory,
                        format: field.format,
                        is_pk,
                        is_key,
                    }
                })
                .collect();

            TableDef {
                namespace: namespace.to_string(),
                name: table.label,
                description: table.detail,
                fields,
                indexes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<RawTable> {
        serde_json::from_str(json).unwrap()
    }

    const ORDERS_JSON: &str = r#"[
        {
            "label": "Orders",
            "detail": "Order header",
            "fields": [
                { "label": "OrderId", "dataType": "integer", "mandatory": true },
                { "label": "Total", "dataType": "decimal", "format": ">>>9.99" }
            ],
            "indexes": [
                {
                    "label": "PK_Orders",
                    "primary": true,
                    "unique": true,
                    "fields": [ { "label": "OrderId" } ]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_pk_field_gets_both_flags() {
        let tables = map_tables("sales", parse(ORDERS_JSON));
        assert_eq!(tables.len(), 1);

        let order_id = tables[0].field("OrderId").unwrap();
        assert!(order_id.is_pk);
        assert!(order_id.is_key);
    }

    #[test]
    fn test_unindexed_field_gets_no_flags() {
        let tables = map_tables("sales", parse(ORDERS_JSON));

        let total = tables[0].field("Total").unwrap();
        assert!(!total.is_pk);
        assert!(!total.is_key);
        assert_eq!(total.format.as_deref(), Some(">>>9.99"));
        assert!(!total.mandatory);
    }

    #[test]
    fn test_non_primary_index_marks_key_only() {
        let json = r#"[
            {
                "label": "Customer",
                "fields": [ { "label": "Name", "dataType": "character" } ],
                "indexes": [
                    { "label": "IX_Name", "fields": [ { "label": "Name" } ] }
                ]
            }
        ]"#;

        let tables = map_tables("crm", parse(json));
        let name = tables[0].field("Name").unwrap();
        assert!(name.is_key);
        assert!(!name.is_pk);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let json = r#"[
            {
                "label": "Customer",
                "fields": [ { "label": "name", "dataType": "character" } ],
                "indexes": [
                    { "label": "IX_Name", "fields": [ { "label": "Name" } ] }
                ]
            }
        ]"#;

        let tables = map_tables("crm", parse(json));
        let name = tables[0].field("name").unwrap();
        assert!(!name.is_key);
        assert!(!name.is_pk);
    }

    #[test]
    fn test_source_order_preserved() {
        let json = r#"[
            { "label": "B", "fields": [], "indexes": [] },
            { "label": "A",
              "fields": [
                  { "label": "z", "dataType": "integer" },
                  { "label": "a", "dataType": "integer" }
              ],
              "indexes": [] }
        ]"#;

        let tables = map_tables("ns", parse(json));
        assert_eq!(tables[0].name, "B");
        assert_eq!(tables[1].name, "A");
        assert_eq!(tables[1].fields[0].name, "z");
        assert_eq!(tables[1].fields[1].name, "a");
    }

    #[test]
    fn test_namespace_assigned_to_every_table() {
        let json = r#"[
            { "label": "A" },
            { "label": "B" }
        ]"#;

        let tables = map_tables("shared", parse(json));
        assert!(tables.iter().all(|t| t.namespace == "shared"));
    }

    #[test]
    fn test_absent_substructures_accepted_as_empty() {
        let json = r#"[ { "label": "Bare" } ]"#;

        let tables = map_tables("ns", parse(json));
        assert_eq!(tables[0].name, "Bare");
        assert!(tables[0].description.is_none());
        assert!(tables[0].fields.is_empty());
        assert!(tables[0].indexes.is_empty());
    }

    #[test]
    fn test_malformed_descriptor_fails_deserialization() {
        // A field without a dataType is a structural error, not a partial map.
        let json = r#"[
            {
                "label": "Broken",
                "fields": [ { "label": "x" } ],
                "indexes": []
            }
        ]"#;

        let result: Result<Vec<RawTable>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
