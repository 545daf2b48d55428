//! Common types used throughout the crate

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Gazetteer Entry
// ============================================================================

/// A single place-name record returned by the Names API.
///
/// The API describes each record with several dozen fields (`NAME1`,
/// `LOCAL_TYPE`, coordinates, administrative areas, ...). The client does
/// not interpret any of them: entries are carried verbatim as JSON objects
/// and handed to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GazetteerEntry(JsonObject);

impl GazetteerEntry {
    /// Wrap a JSON object as an entry
    pub fn new(fields: JsonObject) -> Self {
        Self(fields)
    }

    /// Look up a single field by its API name (e.g. `"NAME1"`)
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.0.get(field)
    }

    /// All fields of the record
    pub fn fields(&self) -> &JsonObject {
        &self.0
    }

    /// Unwrap into the underlying JSON object
    pub fn into_inner(self) -> JsonObject {
        self.0
    }
}

impl From<JsonObject> for GazetteerEntry {
    fn from(fields: JsonObject) -> Self {
        Self(fields)
    }
}
