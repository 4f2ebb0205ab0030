//! The schema catalog: the fixed set of fields a segment can be built from.

use serde::{Deserialize, Serialize};

/// Trait category a schema field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitCategory {
    User,
    Group,
}

impl TraitCategory {
    /// Legend text shown next to the category marker
    pub fn legend(&self) -> &'static str {
        match self {
            TraitCategory::User => "User Traits",
            TraitCategory::Group => "Group Traits",
        }
    }
}

impl std::fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraitCategory::User => write!(f, "user"),
            TraitCategory::Group => write!(f, "group"),
        }
    }
}

/// A single selectable schema field
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SchemaField {
    /// Stable identifier sent to the endpoint
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub category: TraitCategory,
}

/// Every field a segment may contain, in display order.
pub const SCHEMA_CATALOG: &[SchemaField] = &[
    SchemaField {
        key: "first_name",
        label: "First Name",
        category: TraitCategory::User,
    },
    SchemaField {
        key: "last_name",
        label: "Last Name",
        category: TraitCategory::User,
    },
    SchemaField {
        key: "gender",
        label: "Gender",
        category: TraitCategory::User,
    },
    SchemaField {
        key: "age",
        label: "Age",
        category: TraitCategory::User,
    },
    SchemaField {
        key: "account_name",
        label: "Account Name",
        category: TraitCategory::Group,
    },
    SchemaField {
        key: "city",
        label: "City",
        category: TraitCategory::Group,
    },
    SchemaField {
        key: "state",
        label: "State",
        category: TraitCategory::Group,
    },
];

/// Look up a catalog field by key
pub fn find_field(key: &str) -> Option<&'static SchemaField> {
    SCHEMA_CATALOG.iter().find(|field| field.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_keys_are_unique() {
        let keys: HashSet<_> = SCHEMA_CATALOG.iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), SCHEMA_CATALOG.len());
    }

    #[test]
    fn test_catalog_order_and_contents() {
        let keys: Vec<_> = SCHEMA_CATALOG.iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            vec![
                "first_name",
                "last_name",
                "gender",
                "age",
                "account_name",
                "city",
                "state"
            ]
        );
    }

    #[test]
    fn test_find_field() {
        let field = find_field("account_name").unwrap();
        assert_eq!(field.label, "Account Name");
        assert_eq!(field.category, TraitCategory::Group);
        assert!(find_field("zip_code").is_none());
        assert!(find_field("").is_none());
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&TraitCategory::Group).unwrap();
        assert_eq!(json, "\"group\"");
        assert_eq!(TraitCategory::User.to_string(), "user");
        assert_eq!(TraitCategory::User.legend(), "User Traits");
    }
}
