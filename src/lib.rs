//! Hello World MCP Library
//!
//! This library provides an MCP (Model Context Protocol) server exposing a
//! greeting tool and the interactive widget a host renders with its results.

// Domain modules
pub mod hello;
pub mod mcp;
pub mod widget;

// Infrastructure
pub mod clock;
pub mod config;
pub mod router;
pub mod state;
