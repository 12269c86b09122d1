//! Hello World Domain Models
//!
//! Constants and data structures for the `say_hello` tool and its widget.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Name of the greeting tool
pub const TOOL_NAME: &str = "say_hello";
/// URI of the widget resource (and its template)
pub const WIDGET_URI: &str = "ui://widget/widget.html";
/// MIME type for the widget
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Display name of the widget
pub const WIDGET_NAME: &str = "Hello World Widget";

/// Substituted when `name` is absent
pub const DEFAULT_NAME: &str = "World";
/// Substituted when `message` is absent
pub const DEFAULT_MESSAGE: &str = "Welcome to the Hello World app!";

/// Identity reported to the widget
pub const APP_NAME: &str = "Hello World MCP";
pub const APP_VERSION: &str = "1.0.0";

// =============================================================================
// Tool Models
// =============================================================================

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

/// Input for the say_hello tool; each field defaults independently
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SayHelloInput {
    /// Name of the person to greet
    #[serde(default = "default_name")]
    pub name: String,

    /// Message displayed under the greeting
    #[serde(default = "default_message")]
    pub message: String,
}

impl Default for SayHelloInput {
    fn default() -> Self {
        Self {
            name: default_name(),
            message: default_message(),
        }
    }
}

/// Static app identity attached to every greeting
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppIdentity {
    pub app: String,
    pub version: String,
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self {
            app: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
        }
    }
}

/// Everything computed for one invocation; the widget receives all of it
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GreetingData {
    pub greeting: String,
    pub message: String,
    pub timestamp: String,
    pub metadata: AppIdentity,
}

/// The part of [`GreetingData`] the model is allowed to see
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GreetingSummary<'a> {
    pub greeting: &'a str,
    pub message: &'a str,
}

impl GreetingData {
    pub fn new(input: &SayHelloInput, timestamp: String) -> Self {
        Self {
            greeting: format!("Hello, {}!", input.name),
            message: input.message.clone(),
            timestamp,
            metadata: AppIdentity::default(),
        }
    }

    pub fn summary(&self) -> GreetingSummary<'_> {
        GreetingSummary {
            greeting: &self.greeting,
            message: &self.message,
        }
    }

    /// Human-readable answer shown to the model
    pub fn text(&self) -> String {
        format!("{} {}", self.greeting, self.message)
    }
}
