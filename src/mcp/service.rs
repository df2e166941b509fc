//! MCP Streamable HTTP service creation
//!
//! Builds the service nested under `/mcp` by the HTTP server.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::config::WikiConfig;

use super::server::McpServer;

/// Create the MCP Streamable HTTP service
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// use wikijs_mcp::config::WikiConfig;
/// use wikijs_mcp::mcp::create_mcp_service;
///
/// let config = WikiConfig::new("https://wiki.example.com", "token");
/// let app: Router = Router::new()
///     .nest_service("/mcp", create_mcp_service(config, CancellationToken::new()));
/// ```
pub fn create_mcp_service(
    config: impl Into<Arc<WikiConfig>>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer, LocalSessionManager> {
    let config = config.into();

    // One McpServer per session; rmcp expects an io::Error factory.
    let service_factory = move || -> Result<McpServer, std::io::Error> {
        Ok(McpServer::new(Arc::clone(&config)))
    };

    let server_config = StreamableHttpServerConfig::default()
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        server_config,
    )
}
