//! Model Context Protocol (MCP) Module
//!
//! This module contains the MCP request-routing layer:
//! - Protocol models (descriptors, results, JsonRpcRequest, constants)
//! - The capability registry and input schemas
//! - The resource resolver and tool dispatcher
//! - RPC helpers and the HTTP handlers

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod registry;
pub mod resources;
pub mod schema;
pub mod tools;

// Re-export commonly used types and functions
pub use error::McpError;
pub use handlers::routes;
pub use registry::{CapabilityRegistry, RegistryError};
pub use resources::ResourceResolver;
pub use tools::{ToolDispatcher, ToolHandler};
