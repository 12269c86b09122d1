//! Resource Resolver
//!
//! Answers `resources/list`, `resources/templates/list` and
//! `resources/read`. Reads are exact URI matches against the registry;
//! templates are advertised for discovery only.

use super::{
    error::McpError,
    models::{ResourceContent, ResourceDescriptor, ResourceTemplateDescriptor},
    registry::{CapabilityRegistry, RegistryError},
};
use crate::widget::WidgetCatalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct ResourceResolver {
    registry: Arc<CapabilityRegistry>,
    widgets: Arc<WidgetCatalog>,
}

impl ResourceResolver {
    /// Pairs the registry with rendered widgets.
    ///
    /// Every widget whose URI is registered must carry the listed mime type.
    pub fn new(
        registry: Arc<CapabilityRegistry>,
        widgets: Arc<WidgetCatalog>,
    ) -> Result<Self, RegistryError> {
        for descriptor in registry.list_resources() {
            if let Some(widget) = widgets.get(&descriptor.uri) {
                if widget.mime_type != descriptor.mime_type {
                    return Err(RegistryError::MimeTypeMismatch {
                        uri: descriptor.uri.clone(),
                        listed: descriptor.mime_type.clone(),
                        rendered: widget.mime_type.clone(),
                    });
                }
            }
        }

        Ok(Self { registry, widgets })
    }

    pub fn list_resources(&self) -> Vec<ResourceDescriptor> {
        self.registry.list_resources().to_vec()
    }

    pub fn list_resource_templates(&self) -> Vec<ResourceTemplateDescriptor> {
        self.registry.list_resource_templates().to_vec()
    }

    /// Returns the rendered widget registered under `uri`.
    pub fn read_resource(&self, uri: &str) -> Result<ResourceContent, McpError> {
        let unknown = || McpError::UnknownResource {
            uri: uri.to_string(),
        };

        let descriptor = self.registry.resource(uri).ok_or_else(unknown)?;
        let widget = self.widgets.get(uri).ok_or_else(unknown)?;

        Ok(ResourceContent {
            uri: descriptor.uri.clone(),
            mime_type: widget.mime_type.clone(),
            text: widget.html.clone(),
            meta: widget.rendering_hints.clone(),
        })
    }
}
