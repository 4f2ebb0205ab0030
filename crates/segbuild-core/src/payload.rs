//! Submission payload sent to the segment endpoint
//!
//! Wire shape:
//! ```json
//! { "segment_name": "VIP Users", "schema": [ { "first_name": "First Name" } ] }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::SchemaField;

/// One `{ key: label }` object in the `schema` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct SchemaEntry {
    pub key: String,
    pub label: String,
}

impl SchemaEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

impl From<&SchemaField> for SchemaEntry {
    fn from(field: &SchemaField) -> Self {
        Self::new(field.key, field.label)
    }
}

impl From<SchemaEntry> for BTreeMap<String, String> {
    fn from(entry: SchemaEntry) -> Self {
        BTreeMap::from([(entry.key, entry.label)])
    }
}

impl TryFrom<BTreeMap<String, String>> for SchemaEntry {
    type Error = String;

    fn try_from(map: BTreeMap<String, String>) -> std::result::Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(format!(
                "schema entry must have exactly one key, found {}",
                map.len()
            ));
        }
        let (key, label) = map
            .into_iter()
            .next()
            .ok_or_else(|| "empty schema entry".to_string())?;
        Ok(Self { key, label })
    }
}

/// The JSON document posted when a segment is saved
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmissionPayload {
    pub segment_name: String,
    pub schema: Vec<SchemaEntry>,
}

impl SubmissionPayload {
    /// Build a payload from a segment name and the selected fields, in order.
    ///
    /// The name is carried verbatim; trimming only applies to validation.
    pub fn from_selection<'a>(
        segment_name: impl Into<String>,
        fields: impl IntoIterator<Item = &'a SchemaField>,
    ) -> Self {
        Self {
            segment_name: segment_name.into(),
            schema: fields.into_iter().map(SchemaEntry::from).collect(),
        }
    }
}
