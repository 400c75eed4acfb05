//! Schema definition types and the structural comparison used by
//! [`crate::SchemaManager`]. Field names follow Weaviate's wire format
//! (`class`, `dataType`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WeaviateError;

/// A single property of a collection schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaProperty {
    pub name: String,
    /// Ordered sequence of type tokens, e.g. `["text"]`.
    #[serde(rename = "dataType")]
    pub data_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SchemaProperty {
    fn new(name: &str, data_type: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type: vec![data_type.to_string()],
            description: Some(description.to_string()),
        }
    }
}

/// The structural contract the store enforces for one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<SchemaProperty>,
}

impl SchemaDefinition {
    /// Parse a raw store response into a definition.
    ///
    /// Lenient on purpose: a payload whose shape does not match (a property
    /// missing `name` or `dataType`, wrong value types) yields `None`
    /// instead of an error, so comparison stays a pure predicate.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// The canonical schema for storing `ContentItem` aggregates.
///
/// Blocks are persisted as one JSON-encoded text property rather than
/// nested objects; per-block queries are not part of the contract.
pub fn content_item_schema(class_name: &str) -> SchemaDefinition {
    SchemaDefinition {
        class: class_name.to_string(),
        description: Some("ContentItem aggregate with nested blocks".to_string()),
        properties: vec![
            SchemaProperty::new("contentId", "text", "Unique identifier for the content item"),
            SchemaProperty::new("type", "text", "Type of the content item"),
            SchemaProperty::new("title", "text", "Title of the content item"),
            SchemaProperty::new("summary", "text", "Summary of the content item"),
            SchemaProperty::new("createdAt", "date", "Creation timestamp"),
            SchemaProperty::new("updatedAt", "date", "Last update timestamp"),
            SchemaProperty::new("blockCount", "int", "Number of blocks in the content item"),
            SchemaProperty::new("blocks", "text", "JSON-encoded array of blocks (markdown, etc.)"),
        ],
    }
}

/// Structural equality between a candidate definition and the expected one.
///
/// Equal iff the class names match, the property counts match, and every
/// expected property exists in the candidate by name with an identical
/// `dataType` sequence. Property order and descriptions are ignored.
pub fn schemas_match(candidate: &SchemaDefinition, expected: &SchemaDefinition) -> bool {
    if candidate.class != expected.class {
        return false;
    }
    if candidate.properties.len() != expected.properties.len() {
        return false;
    }
    expected.properties.iter().all(|want| {
        candidate
            .properties
            .iter()
            .any(|got| got.name == want.name && got.data_type == want.data_type)
    })
}

/// Check a collection name against Weaviate's naming rules before any
/// store call: non-empty, leading ASCII uppercase letter, then only
/// alphanumerics or underscores. Hyphens in particular are rejected.
pub fn validate_class_name(class_name: &str) -> Result<(), WeaviateError> {
    let mut chars = class_name.chars();
    let reason = match chars.next() {
        None => Some("class name cannot be empty".to_string()),
        Some(first) if !first.is_ascii_uppercase() => {
            Some("class name must start with an uppercase letter".to_string())
        }
        Some(_) => chars
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_')
            .map(|c| format!("class name contains invalid character '{c}'")),
    };
    match reason {
        Some(reason) => Err(WeaviateError::InvalidClassName {
            class_name: class_name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
