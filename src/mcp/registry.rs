//! Capability Registry
//!
//! The frozen set of resources, resource templates and tools this server
//! advertises. It is assembled once at startup through
//! [`RegistryBuilder`] and only read afterwards, so it can be shared across
//! request handlers without locking.

use super::models::{ResourceDescriptor, ResourceTemplateDescriptor, ToolDescriptor};
use super::tools::ToolHandler;
use std::{collections::HashMap, sync::Arc};
use thiserror::Error;

/// Startup-time registration failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("resource '{0}' is registered twice")]
    DuplicateResource(String),
    #[error("resource template '{0}' is registered twice")]
    DuplicateTemplate(String),
    #[error("tool '{0}' is registered twice")]
    DuplicateTool(String),
    #[error("widget '{uri}' is rendered as {rendered} but listed as {listed}")]
    MimeTypeMismatch {
        uri: String,
        listed: String,
        rendered: String,
    },
}

/// A tool descriptor paired with the handler that serves it
#[derive(Clone)]
pub struct RegisteredTool {
    pub descriptor: ToolDescriptor,
    pub handler: Arc<dyn ToolHandler>,
}

/// Read-only snapshot of every capability, in registration order.
#[derive(Default)]
pub struct CapabilityRegistry {
    resources: Vec<ResourceDescriptor>,
    resource_index: HashMap<String, usize>,
    templates: Vec<ResourceTemplateDescriptor>,
    tools: Vec<RegisteredTool>,
    tool_index: HashMap<String, usize>,
}

impl CapabilityRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn list_resources(&self) -> &[ResourceDescriptor] {
        &self.resources
    }

    pub fn list_resource_templates(&self) -> &[ResourceTemplateDescriptor] {
        &self.templates
    }

    pub fn list_tools(&self) -> impl Iterator<Item = &ToolDescriptor> + '_ {
        self.tools.iter().map(|t| &t.descriptor)
    }

    /// Exact-match lookup of a resource by URI
    pub fn resource(&self, uri: &str) -> Option<&ResourceDescriptor> {
        self.resource_index.get(uri).map(|&i| &self.resources[i])
    }

    /// Lookup of a tool by name
    pub fn tool(&self, name: &str) -> Option<&RegisteredTool> {
        self.tool_index.get(name).map(|&i| &self.tools[i])
    }
}

/// Collects capabilities before the registry is frozen.
///
/// Errors are deferred to [`RegistryBuilder::build`] so registrations can be
/// chained.
#[derive(Default)]
pub struct RegistryBuilder {
    registry: CapabilityRegistry,
    error: Option<RegistryError>,
}

impl RegistryBuilder {
    pub fn resource(mut self, descriptor: ResourceDescriptor) -> Self {
        if self.registry.resource_index.contains_key(&descriptor.uri) {
            self.fail(RegistryError::DuplicateResource(descriptor.uri));
            return self;
        }
        let index = self.registry.resources.len();
        self.registry
            .resource_index
            .insert(descriptor.uri.clone(), index);
        self.registry.resources.push(descriptor);
        self
    }

    pub fn resource_template(mut self, descriptor: ResourceTemplateDescriptor) -> Self {
        let duplicate = self
            .registry
            .templates
            .iter()
            .any(|t| t.uri_template == descriptor.uri_template);
        if duplicate {
            self.fail(RegistryError::DuplicateTemplate(descriptor.uri_template));
            return self;
        }
        self.registry.templates.push(descriptor);
        self
    }

    pub fn tool(mut self, descriptor: ToolDescriptor, handler: Arc<dyn ToolHandler>) -> Self {
        if self.registry.tool_index.contains_key(&descriptor.name) {
            self.fail(RegistryError::DuplicateTool(descriptor.name));
            return self;
        }
        let index = self.registry.tools.len();
        self.registry
            .tool_index
            .insert(descriptor.name.clone(), index);
        self.registry.tools.push(RegisteredTool {
            descriptor,
            handler,
        });
        self
    }

    pub fn build(self) -> Result<CapabilityRegistry, RegistryError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.registry),
        }
    }

    fn fail(&mut self, err: RegistryError) {
        // Keep the first error.
        self.error.get_or_insert(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::models::ToolResult;
    use crate::mcp::schema::InputSchema;
    use crate::mcp::McpError;
    use serde_json::{json, Map, Value};

    struct Echo;

    impl ToolHandler for Echo {
        fn handle(&self, args: Map<String, Value>) -> Result<ToolResult, McpError> {
            Ok(ToolResult {
                text_summary: "echo".into(),
                structured_content: Value::Object(args.clone()),
                private_metadata: Value::Object(args),
            })
        }
    }

    fn resource(uri: &str) -> ResourceDescriptor {
        ResourceDescriptor {
            uri: uri.into(),
            name: uri.into(),
            title: uri.into(),
            description: String::new(),
            mime_type: "text/html".into(),
        }
    }

    fn tool(name: &str) -> ToolDescriptor {
        ToolDescriptor {
            name: name.into(),
            title: name.into(),
            description: String::new(),
            input_schema: InputSchema::new(),
            meta: Map::new(),
        }
    }

    #[test]
    fn preserves_registration_order() {
        let registry = CapabilityRegistry::builder()
            .resource(resource("ui://b"))
            .resource(resource("ui://a"))
            .tool(tool("zeta"), Arc::new(Echo))
            .tool(tool("alpha"), Arc::new(Echo))
            .build()
            .unwrap();

        let uris: Vec<_> = registry.list_resources().iter().map(|r| &r.uri).collect();
        assert_eq!(uris, ["ui://b", "ui://a"]);
        let names: Vec<_> = registry.list_tools().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn lookups_are_exact() {
        let registry = CapabilityRegistry::builder()
            .resource(resource("ui://widget/widget.html"))
            .tool(tool("echo"), Arc::new(Echo))
            .build()
            .unwrap();

        assert!(registry.resource("ui://widget/widget.html").is_some());
        assert!(registry.resource("ui://widget/").is_none());
        assert!(registry.tool("echo").is_some());
        assert!(registry.tool("ECHO").is_none());

        let result = registry
            .tool("echo")
            .unwrap()
            .handler
            .handle(json!({ "a": 1 }).as_object().cloned().unwrap())
            .unwrap();
        assert_eq!(result.structured_content["a"], 1);
    }

    #[test]
    fn rejects_duplicates() {
        let err = CapabilityRegistry::builder()
            .tool(tool("echo"), Arc::new(Echo))
            .tool(tool("echo"), Arc::new(Echo))
            .build()
            .err();
        assert_eq!(err, Some(RegistryError::DuplicateTool("echo".into())));

        let err = CapabilityRegistry::builder()
            .resource(resource("ui://a"))
            .resource(resource("ui://a"))
            .build()
            .err();
        assert_eq!(err, Some(RegistryError::DuplicateResource("ui://a".into())));
    }
}
