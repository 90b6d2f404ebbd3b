//! Tool descriptor types for the blockchain toolkit seam.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named callable exposed by the blockchain toolkit.
///
/// The descriptor is what the LLM sees: name, description, and a JSON
/// Schema for the parameters. Execution lives behind the `Toolkit`
/// trait in hashtalk-core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    /// JSON Schema: `{"type": "object", "properties": {...}, "required": [...]}`.
    pub parameters: Value,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// Network credentials for the operator account the toolkit acts as.
///
/// Constructed per request from caller-supplied credential material.
/// Key parsing and client construction are the external toolkit's
/// concern; this layer only carries the strings through.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorCredentials {
    pub account_id: String,
    pub private_key: String,
}

impl fmt::Debug for OperatorCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorCredentials")
            .field("account_id", &self.account_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
