//! MCP Error Types
//!
//! Client-input failures raised by the resource resolver and the tool
//! dispatcher, plus their JSON-RPC error codes.

use super::schema::SchemaViolation;
use serde_json::{json, Value};
use thiserror::Error;

/// JSON-RPC: invalid JSON was received
pub const PARSE_ERROR: i32 = -32700;
/// JSON-RPC: the JSON sent is not a valid request object
pub const INVALID_REQUEST: i32 = -32600;
/// JSON-RPC: the method does not exist
pub const METHOD_NOT_FOUND: i32 = -32601;
/// JSON-RPC: invalid method parameters
pub const INVALID_PARAMS: i32 = -32602;
/// MCP: the requested resource does not exist
pub const RESOURCE_NOT_FOUND: i32 = -32002;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum McpError {
    #[error("Unknown resource URI: {uri}")]
    UnknownResource { uri: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments {
        tool: String,
        reason: SchemaViolation,
    },
}

impl McpError {
    /// JSON-RPC error code reported to the client
    pub fn code(&self) -> i32 {
        match self {
            McpError::UnknownResource { .. } => RESOURCE_NOT_FOUND,
            McpError::UnknownTool { .. } | McpError::InvalidArguments { .. } => INVALID_PARAMS,
        }
    }

    /// Structured detail identifying the offending uri, tool or field
    pub fn data(&self) -> Value {
        match self {
            McpError::UnknownResource { uri } => json!({ "uri": uri }),
            McpError::UnknownTool { name } => json!({ "tool": name }),
            McpError::InvalidArguments { tool, reason } => json!({
                "tool": tool,
                "field": reason.field(),
            }),
        }
    }
}
