//! MCP Protocol Helpers
//!
//! JSON-RPC 2.0 envelope construction and protocol version negotiation.

use super::models::{PROTOCOL_VERSION, SUPPORTED_PROTOCOL_VERSIONS};
use serde_json::{json, Value};

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Same as [`rpc_error`] with a structured `data` member.
pub fn rpc_error_with_data(id: Value, code: i32, message: impl Into<String>, data: Value) -> Value {
    let mut response = rpc_error(id, code, message);
    response["error"]["data"] = data;
    response
}

/// Picks the protocol version to answer `initialize` with.
///
/// The client's version is echoed when supported, otherwise the server falls
/// back to its default.
pub fn negotiate_protocol_version(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|v| SUPPORTED_PROTOCOL_VERSIONS.iter().find(|s| **s == v))
        .copied()
        .unwrap_or(PROTOCOL_VERSION)
}
