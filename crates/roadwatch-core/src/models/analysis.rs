use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Structured analysis record returned by the backend.
///
/// The client does not interpret the fields; it only guarantees the body was
/// valid JSON. Use `AnalysisClient::analyze_as` to deserialize into a typed
/// record instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(JsonValue);

impl AnalysisResult {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

impl From<JsonValue> for AnalysisResult {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}
