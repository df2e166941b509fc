//! Wiki.js page tools for MCP clients, a REST bridge and a CLI.
//!
//! - **config**: connection settings loaded from the environment
//! - **wiki**: GraphQL gateway, query catalog, models and page operations
//! - **mcp**: tool dispatch, result formatting and the rmcp server
//! - **api**: axum HTTP server (REST, OpenAPI docs, `/mcp`)
//! - **cli**: clap front end for invoking tools from a shell

pub mod api;
pub mod cli;
pub mod config;
pub mod mcp;
pub mod serde_utils;
pub mod wiki;
