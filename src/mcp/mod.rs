//! Model Context Protocol (MCP) server implementation
//!
//! - **params**: tool argument types (MCP and OpenAPI schemas)
//! - **dispatch**: the closed tool set and the dispatcher every transport uses
//! - **format**: text rendering of tool results
//! - **server**: rmcp tool router and `ServerHandler`
//! - **service**: Streamable HTTP service for the `/mcp` route
//!
//! The stdio transport lives in the `wikijs-mcp` binary.

pub mod dispatch;
pub mod format;
pub mod params;
pub mod server;
mod service;

#[cfg(test)]
mod format_test;

pub use dispatch::{Dispatcher, ToolCall, ToolResponse, WikiTool};
pub use server::McpServer;
pub use service::create_mcp_service;
