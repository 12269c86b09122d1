//! Application State
//!
//! Everything request handlers share: the frozen capability registry behind
//! a resource resolver and a tool dispatcher. Built once before the server
//! starts accepting requests and never mutated afterwards.

use crate::clock::{Clock, SystemClock};
use crate::hello;
use crate::mcp::{CapabilityRegistry, RegistryError, ResourceResolver, ToolDispatcher};
use crate::widget::{WidgetBundle, WidgetCatalog};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub resources: ResourceResolver,
    pub tools: ToolDispatcher,
}

impl AppState {
    /// Builds the state around `bundle` using the wall clock.
    pub fn new(bundle: &WidgetBundle) -> Result<Self, RegistryError> {
        Self::with_clock(bundle, Arc::new(SystemClock))
    }

    pub fn with_clock(bundle: &WidgetBundle, clock: Arc<dyn Clock>) -> Result<Self, RegistryError> {
        let registry = Arc::new(hello::register(CapabilityRegistry::builder(), clock).build()?);
        let widgets: WidgetCatalog = [hello::helpers::widget_resource(&bundle.script)]
            .into_iter()
            .collect();

        Ok(Self {
            resources: ResourceResolver::new(registry.clone(), Arc::new(widgets))?,
            tools: ToolDispatcher::new(registry),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hello::models::{TOOL_NAME, WIDGET_URI};
    use serde_json::json;

    fn state() -> AppState {
        AppState::new(&WidgetBundle::from_script("console.log('widget');")).unwrap()
    }

    #[test]
    fn listed_capabilities_resolve() {
        let state = state();

        for tool in state.tools.list_tools() {
            assert!(state.tools.invoke(&tool.name, None).is_ok());
        }
        for resource in state.resources.list_resources() {
            let content = state.resources.read_resource(&resource.uri).unwrap();
            assert_eq!(content.mime_type, resource.mime_type);
        }
    }

    #[test]
    fn widget_embeds_bundle() {
        let content = state().resources.read_resource(WIDGET_URI).unwrap();
        assert!(content.text.contains("console.log('widget');"));
        assert_eq!(content.mime_type, "text/html+skybridge");
    }

    #[test]
    fn discovery_is_idempotent() {
        let state = state();
        assert_eq!(state.tools.list_tools(), state.tools.list_tools());
        assert_eq!(
            state.resources.list_resource_templates(),
            state.resources.list_resource_templates()
        );
    }

    #[test]
    fn say_hello_end_to_end() {
        let result = state()
            .tools
            .invoke(TOOL_NAME, Some(json!({ "name": "Ada", "message": "Hi!" })))
            .unwrap();
        assert_eq!(result.text_summary, "Hello, Ada! Hi!");
        assert!(state().tools.invoke(TOOL_NAME, Some(json!({ "extra": 1 }))).is_err());
    }
}
