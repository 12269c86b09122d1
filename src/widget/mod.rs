//! Widget Content
//!
//! The HTML shells served as MCP resources. Each widget is rendered once at
//! startup from a script bundle and kept unchanged for the process lifetime.

pub mod bundle;

pub use bundle::{WidgetBundle, WidgetError};

use serde_json::{Map, Value};
use std::collections::HashMap;

/// A rendered widget ready to be returned by `resources/read`
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetResource {
    pub uri: String,
    pub mime_type: String,
    pub html: String,

    /// Pass-through hints for the host (border, domains, CSP allow-lists)
    pub rendering_hints: Map<String, Value>,
}

/// Wraps a script bundle in the host page shell.
///
/// A plain `<script>` tag is used (not `type="module"`) so IIFE bundles run.
pub fn render_widget_html(script: &str) -> String {
    format!("<div id=\"root\"></div>\n<script>\n{script}\n</script>")
}

/// Widgets keyed by resource URI
#[derive(Debug, Default)]
pub struct WidgetCatalog {
    widgets: HashMap<String, WidgetResource>,
}

impl WidgetCatalog {
    pub fn get(&self, uri: &str) -> Option<&WidgetResource> {
        self.widgets.get(uri)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl FromIterator<WidgetResource> for WidgetCatalog {
    fn from_iter<I: IntoIterator<Item = WidgetResource>>(iter: I) -> Self {
        Self {
            widgets: iter.into_iter().map(|w| (w.uri.clone(), w)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_embeds_script() {
        assert_eq!(
            render_widget_html("console.log(1);"),
            "<div id=\"root\"></div>\n<script>\nconsole.log(1);\n</script>"
        );
    }

    #[test]
    fn catalog_is_keyed_by_uri() {
        let catalog: WidgetCatalog = ["ui://a", "ui://b"]
            .into_iter()
            .map(|uri| WidgetResource {
                uri: uri.into(),
                mime_type: "text/html".into(),
                html: render_widget_html(uri),
                rendering_hints: Map::new(),
            })
            .collect();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("ui://b").unwrap().html.contains("ui://b"));
        assert!(catalog.get("ui://c").is_none());
    }
}
