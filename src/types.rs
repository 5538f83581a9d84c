//! Common types used throughout node-infer
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type. Every record ("node") is one of these.
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Node Conventions
// ============================================================================

/// Top-level fields supplied by the surrounding system rather than inferred
pub const RESERVED_FIELDS: [&str; 4] = ["type", "id", "parent", "children"];

/// Record type name of file nodes
pub const FILE_TYPE_NAME: &str = "File";

/// Key suffix marking a field that holds the id(s) of other nodes
pub const LINK_SUFFIX: &str = "___NODE";

/// Check if a top-level field is reserved
pub fn is_reserved_field(key: &str) -> bool {
    RESERVED_FIELDS.contains(&key)
}

/// Accessors for the node conventions carried by a record
pub trait NodeExt {
    /// The node's record type (its `type` field)
    fn node_type(&self) -> Option<&str>;

    /// The node's identifier (its `id` field)
    fn node_id(&self) -> Option<&JsonValue>;
}

impl NodeExt for JsonObject {
    fn node_type(&self) -> Option<&str> {
        self.get("type").and_then(JsonValue::as_str)
    }

    fn node_id(&self) -> Option<&JsonValue> {
        self.get("id").filter(|id| !id.is_null())
    }
}

/// Render an id value the way dependency logs store it
pub fn id_to_string(id: &JsonValue) -> String {
    match id {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Example Policy
// ============================================================================

/// Which occurrence stands in for a field when records disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamplePolicy {
    /// Keep the first occurrence seen
    FirstSeen,
    /// Later occurrences replace earlier ones
    #[default]
    LastSeen,
}

// ============================================================================
// Utilities
// ============================================================================

/// Join path segments with `.`, skipping empty ones
pub fn join_selector<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
