//! Tool Dispatcher
//!
//! Routes `tools/call` requests to the handler registered under the tool's
//! name. Arguments are validated against the tool's input schema before the
//! handler is invoked, so handlers only ever see well-formed input.

use super::{
    error::McpError,
    models::{ToolDescriptor, ToolResult},
    registry::CapabilityRegistry,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// A single tool implementation.
///
/// `args` has already been checked against the tool's [`InputSchema`]; the
/// handler is responsible for substituting defaults for absent properties.
///
/// [`InputSchema`]: super::schema::InputSchema
pub trait ToolHandler: Send + Sync {
    fn handle(&self, args: Map<String, Value>) -> Result<ToolResult, McpError>;
}

#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<CapabilityRegistry>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<CapabilityRegistry>) -> Self {
        Self { registry }
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.registry.list_tools().cloned().collect()
    }

    /// Validates `args` and runs the named tool.
    pub fn invoke(&self, name: &str, args: Option<Value>) -> Result<ToolResult, McpError> {
        let tool = self
            .registry
            .tool(name)
            .ok_or_else(|| McpError::UnknownTool {
                name: name.to_string(),
            })?;

        let args = tool
            .descriptor
            .input_schema
            .validate_value(args)
            .map_err(|reason| McpError::InvalidArguments {
                tool: name.to_string(),
                reason,
            })?;

        debug!(tool = name, "invoking tool");
        tool.handler.handle(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::schema::{InputSchema, JsonType, PropertySchema, SchemaViolation};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts invocations so tests can prove validation precedes dispatch.
    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl ToolHandler for Counting {
        fn handle(&self, args: Map<String, Value>) -> Result<ToolResult, McpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let value = Value::Object(args);
            Ok(ToolResult {
                text_summary: value.to_string(),
                structured_content: value.clone(),
                private_metadata: value,
            })
        }
    }

    fn dispatcher(handler: Arc<Counting>) -> ToolDispatcher {
        let descriptor = ToolDescriptor {
            name: "count".into(),
            title: "Count".into(),
            description: "Counts calls".into(),
            input_schema: InputSchema::new()
                .property("label", PropertySchema::new(JsonType::String)),
            meta: Map::new(),
        };
        let registry = CapabilityRegistry::builder()
            .tool(descriptor, handler)
            .build()
            .unwrap();
        ToolDispatcher::new(Arc::new(registry))
    }

    #[test]
    fn routes_by_name() {
        let handler = Arc::new(Counting::default());
        let dispatcher = dispatcher(handler.clone());

        let result = dispatcher
            .invoke("count", Some(json!({ "label": "x" })))
            .unwrap();
        assert_eq!(result.structured_content, json!({ "label": "x" }));
        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unknown_tool_is_named() {
        let dispatcher = dispatcher(Arc::new(Counting::default()));
        let err = dispatcher.invoke("nonexistent", None).unwrap_err();
        assert_eq!(
            err,
            McpError::UnknownTool {
                name: "nonexistent".into()
            }
        );
    }

    #[test]
    fn invalid_arguments_never_reach_the_handler() {
        let handler = Arc::new(Counting::default());
        let dispatcher = dispatcher(handler.clone());

        let err = dispatcher
            .invoke("count", Some(json!({ "extra": 1 })))
            .unwrap_err();
        assert_eq!(
            err,
            McpError::InvalidArguments {
                tool: "count".into(),
                reason: SchemaViolation::UnexpectedProperty("extra".into()),
            }
        );

        let err = dispatcher
            .invoke("count", Some(json!({ "label": 7 })))
            .unwrap_err();
        assert!(matches!(err, McpError::InvalidArguments { .. }));
        assert_eq!(handler.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn listed_names_are_invocable() {
        let dispatcher = dispatcher(Arc::new(Counting::default()));
        for tool in dispatcher.list_tools() {
            assert!(dispatcher.invoke(&tool.name, None).is_ok());
        }
    }
}
