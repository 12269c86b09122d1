//! say_hello tool handler

use super::models::*;
use crate::clock::Clock;
use crate::mcp::{models::ToolResult, schema::SchemaViolation, tools::ToolHandler, McpError};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Greets a person by name. Pure apart from the timestamp.
pub struct SayHello {
    clock: Arc<dyn Clock>,
}

impl SayHello {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Builds the result for already-parsed input.
    pub fn greet(&self, input: &SayHelloInput) -> ToolResult {
        let data = GreetingData::new(input, self.clock.timestamp());

        // Both views are derived from the same `data`, so they cannot disagree.
        ToolResult {
            text_summary: data.text(),
            structured_content: json!(data.summary()),
            private_metadata: json!(data),
        }
    }
}

impl ToolHandler for SayHello {
    fn handle(&self, args: Map<String, Value>) -> Result<ToolResult, McpError> {
        let input: SayHelloInput = serde_json::from_value(Value::Object(args)).map_err(|e| {
            McpError::InvalidArguments {
                tool: TOOL_NAME.to_string(),
                reason: SchemaViolation::Malformed(e.to_string()),
            }
        })?;

        Ok(self.greet(&input))
    }
}
