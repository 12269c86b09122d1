//! MCP (Model Context Protocol) route handlers
//!
//! Decodes JSON-RPC requests, routes them to the resource resolver or the
//! tool dispatcher, and encodes the outcome. Every request is independent;
//! no session state is kept between calls.

use super::{error::*, helpers::*, models::*};
use crate::state::{AppState, SharedState};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Path clients post messages to, announced by the SSE handshake
pub const MESSAGE_PATH: &str = "/mcp/messages";

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
        .route(MESSAGE_PATH, post(handle_mcp))
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        format!("event: endpoint\ndata: {}\n\n", MESSAGE_PATH),
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!("rejected JSON-RPC body: {}", e.body_text());
            let (code, message) = match e {
                JsonRejection::JsonSyntaxError(_) => (PARSE_ERROR, "Parse error"),
                _ => (INVALID_REQUEST, "Invalid Request"),
            };
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, code, message)),
            )
                .into_response();
        }
    };

    // Notifications carry no id and get no JSON-RPC response.
    let Some(id) = req.id else {
        debug!(method = %req.method, "MCP notification");
        return StatusCode::ACCEPTED.into_response();
    };

    debug!(method = %req.method, id = %id, "MCP call");

    let params = req.params.unwrap_or(Value::Null);
    let response_body = match dispatch(&state, &req.method, params) {
        Ok(result) => rpc_success(id, result),
        Err(RpcFailure {
            code,
            message,
            data,
        }) => {
            warn!(method = %req.method, code, "{}", message);
            match data {
                Some(data) => rpc_error_with_data(id, code, message, data),
                None => rpc_error(id, code, message),
            }
        }
    };

    Json(response_body).into_response()
}

/// An error ready to be placed in a JSON-RPC error envelope
#[derive(Debug)]
struct RpcFailure {
    code: i32,
    message: String,
    data: Option<Value>,
}

impl RpcFailure {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl From<McpError> for RpcFailure {
    fn from(err: McpError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
            data: Some(err.data()),
        }
    }
}

fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, RpcFailure> {
    serde_json::from_value(params)
        .map_err(|e| RpcFailure::new(INVALID_PARAMS, format!("Invalid params: {}", e)))
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

fn dispatch(state: &AppState, method: &str, params: Value) -> Result<Value, RpcFailure> {
    match method {
        "initialize" => Ok(handle_initialize(params)),
        "notifications/initialized" | "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": state.tools.list_tools() })),
        "tools/call" => {
            let params: CallToolParams = parse_params(params)?;
            let result = state.tools.invoke(&params.name, params.arguments)?;
            Ok(result.to_wire())
        }
        "resources/list" => Ok(json!({ "resources": state.resources.list_resources() })),
        "resources/templates/list" => Ok(json!({
            "resourceTemplates": state.resources.list_resource_templates()
        })),
        "resources/read" => {
            let params: ReadResourceParams = parse_params(params)?;
            let content = state.resources.read_resource(&params.uri)?;
            Ok(json!({ "contents": [content] }))
        }
        _ => Err(RpcFailure::new(METHOD_NOT_FOUND, "Method not found")),
    }
}

/// Handles `initialize` request (Handshake).
fn handle_initialize(params: Value) -> Value {
    let params: InitializeParams = serde_json::from_value(params).unwrap_or_default();
    let version = negotiate_protocol_version(params.protocol_version.as_deref());

    // The registry is frozen at startup, so lists never change.
    json!({
        "protocolVersion": version,
        "capabilities": {
            "tools": { "listChanged": false },
            "resources": { "listChanged": false, "subscribe": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}
