//! Hello World Capability Descriptors
//!
//! Builders for the descriptors and host metadata the Hello World app
//! registers at startup.

use super::models::*;
use crate::mcp::models::{Meta, ResourceDescriptor, ResourceTemplateDescriptor, ToolDescriptor};
use crate::mcp::schema::{InputSchema, JsonType, PropertySchema};
use crate::widget::{render_widget_html, WidgetResource};
use serde_json::{json, Value};

fn into_meta(value: Value) -> Meta {
    match value {
        Value::Object(map) => map,
        _ => Meta::new(),
    }
}

/// Constructs the tool metadata read by the OpenAI widget system.
///
/// * `openai/outputTemplate` binds the tool to the widget resource.
/// * `openai/toolInvocation/*` are the status lines shown while the tool runs.
/// * `annotations` carries the side-effect hints.
pub fn tool_meta() -> Meta {
    into_meta(json!({
        "openai/outputTemplate": WIDGET_URI,
        "openai/toolInvocation/invoking": "Generating hello world greeting...",
        "openai/toolInvocation/invoked": "Greeting generated successfully",
        "openai/widgetAccessible": true,
        "openai/resultCanProduceWidget": true,
        "annotations": {
            "destructiveHint": false,
            "openWorldHint": false,
            "readOnlyHint": true,
        },
    }))
}

/// Rendering hints returned with the widget HTML.
pub fn widget_rendering_hints() -> Meta {
    into_meta(json!({
        "openai/widgetPrefersBorder": true,
        "openai/widgetDomain": "https://chatgpt.com",
        "openai/widgetCSP": {
            "connect_domains": ["https://chatgpt.com"],
            "resource_domains": ["https://persistent.oaistatic.com"],
        },
        "openai/widgetDescription": "Interactive hello world display",
    }))
}

pub fn widget_descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        uri: WIDGET_URI.to_string(),
        name: WIDGET_NAME.to_string(),
        title: WIDGET_NAME.to_string(),
        description: "Interactive hello world widget UI".to_string(),
        mime_type: WIDGET_MIME_TYPE.to_string(),
    }
}

pub fn widget_template() -> ResourceTemplateDescriptor {
    ResourceTemplateDescriptor {
        uri_template: WIDGET_URI.to_string(),
        name: WIDGET_NAME.to_string(),
        title: WIDGET_NAME.to_string(),
        description: "Interactive hello world widget UI template".to_string(),
        mime_type: WIDGET_MIME_TYPE.to_string(),
    }
}

/// Renders the widget around the fetched script bundle.
pub fn widget_resource(script: &str) -> WidgetResource {
    WidgetResource {
        uri: WIDGET_URI.to_string(),
        mime_type: WIDGET_MIME_TYPE.to_string(),
        html: render_widget_html(script),
        rendering_hints: widget_rendering_hints(),
    }
}

pub fn say_hello_descriptor() -> ToolDescriptor {
    let input_schema = InputSchema::new()
        .property(
            "name",
            PropertySchema::new(JsonType::String)
                .description("Name of the person to greet (defaults to 'World')"),
        )
        .property(
            "message",
            PropertySchema::new(JsonType::String)
                .description("Optional custom message to display"),
        );

    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        title: "Say Hello".to_string(),
        description:
            "Generates a personalized hello world greeting with optional custom message"
                .to_string(),
        input_schema,
        meta: tool_meta(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_is_bound_to_widget() {
        let descriptor = say_hello_descriptor();
        assert_eq!(descriptor.meta["openai/outputTemplate"], WIDGET_URI);
        assert_eq!(descriptor.meta["annotations"]["readOnlyHint"], true);
        assert!(!descriptor.input_schema.additional_properties);
        assert!(descriptor.input_schema.required.is_empty());
    }

    #[test]
    fn widget_html_contains_script() {
        let widget = widget_resource("console.log('bundle');");
        assert!(widget.html.contains("console.log('bundle');"));
        assert!(widget.html.starts_with("<div id=\"root\"></div>"));
        assert_eq!(
            widget.rendering_hints["openai/widgetCSP"]["resource_domains"][0],
            "https://persistent.oaistatic.com"
        );
    }
}
