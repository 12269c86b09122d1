//! Hello World App Module
//!
//! The single tool (`say_hello`) and widget resource this server exposes:
//! - Domain models (input, greeting data, constants)
//! - Descriptor and metadata builders
//! - The tool handler

pub mod handlers;
pub mod helpers;
pub mod models;

pub use handlers::SayHello;

use crate::clock::Clock;
use crate::mcp::registry::RegistryBuilder;
use std::sync::Arc;

/// Registers the widget resource, its template and the `say_hello` tool.
pub fn register(builder: RegistryBuilder, clock: Arc<dyn Clock>) -> RegistryBuilder {
    builder
        .resource(helpers::widget_descriptor())
        .resource_template(helpers::widget_template())
        .tool(helpers::say_hello_descriptor(), Arc::new(SayHello::new(clock)))
}
