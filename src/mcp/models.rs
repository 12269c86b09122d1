//! MCP Protocol Models and Constants
//!
//! This module contains the data structures exchanged with the host through
//! the Model Context Protocol: capability descriptors, resource contents,
//! tool results and the JSON-RPC request envelope.

use super::schema::InputSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// MCP Constants
// =============================================================================

/// Server identifier reported during the handshake
pub const SERVER_NAME: &str = "hello-world";
/// Protocol version used when the client does not ask for a supported one
pub const PROTOCOL_VERSION: &str = "2024-11-05";
/// Protocol versions this server can speak, newest first
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2025-06-18", "2025-03-26", PROTOCOL_VERSION];

/// Opaque, host-consumed key/value annotations (`_meta` on the wire).
pub type Meta = Map<String, Value>;

// =============================================================================
// Capability Descriptors
// =============================================================================

/// A concrete resource the host can read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub mime_type: String,
}

/// Discovery-only descriptor keyed by a URI template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTemplateDescriptor {
    pub uri_template: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub mime_type: String,
}

/// Describes a tool the model may invoke.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Unique key used by `tools/call`
    pub name: String,
    pub title: String,
    pub description: String,
    pub input_schema: InputSchema,

    /// Host-only hints (output template binding, invocation status strings, ...)
    #[serde(rename = "_meta", default, skip_serializing_if = "Map::is_empty")]
    pub meta: Meta,
}

// =============================================================================
// Results
// =============================================================================

/// Text contents returned by `resources/read`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
    #[serde(rename = "_meta", skip_serializing_if = "Map::is_empty")]
    pub meta: Meta,
}

/// Outcome of a successful tool invocation.
///
/// `structured_content` is what the model sees; `private_metadata` is only
/// forwarded to the widget. Handlers build both from the same data.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    pub text_summary: String,
    pub structured_content: Value,
    pub private_metadata: Value,
}

impl ToolResult {
    /// Shapes the result as an MCP `CallToolResult`.
    pub fn to_wire(&self) -> Value {
        serde_json::json!({
            "content": [{ "type": "text", "text": self.text_summary }],
            "structuredContent": self.structured_content,
            "_meta": { "fullData": self.private_metadata },
        })
    }
}

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier; absent for notifications
    pub id: Option<Value>,
}

/// Parameters of `tools/call`
#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Parameters of `resources/read`
#[derive(Debug, Deserialize)]
pub struct ReadResourceParams {
    pub uri: String,
}

/// Parameters of `initialize` that the server cares about
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    #[serde(default)]
    pub protocol_version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_result_wire_shape() {
        let result = ToolResult {
            text_summary: "Hello, World! Hi".into(),
            structured_content: json!({ "greeting": "Hello, World!" }),
            private_metadata: json!({ "greeting": "Hello, World!", "extra": 1 }),
        };

        let wire = result.to_wire();
        assert_eq!(wire["content"][0]["type"], "text");
        assert_eq!(wire["content"][0]["text"], "Hello, World! Hi");
        assert_eq!(wire["structuredContent"]["greeting"], "Hello, World!");
        assert_eq!(wire["_meta"]["fullData"]["extra"], 1);
    }

    #[test]
    fn resource_content_omits_empty_meta() {
        let content = ResourceContent {
            uri: "ui://widget/a.html".into(),
            mime_type: "text/html".into(),
            text: "<div></div>".into(),
            meta: Meta::new(),
        };

        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(value["mimeType"], "text/html");
        assert!(value.get("_meta").is_none());
    }
}
