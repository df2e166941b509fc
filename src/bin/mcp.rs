//! Wiki.js MCP server over stdio.
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "wikijs": {
//!       "command": "wikijs-mcp",
//!       "env": { "WIKIJS_URL": "https://wiki.example.com", "WIKIJS_API_KEY": "..." }
//!     }
//!   }
//! }
//! ```

use clap::Parser;
use miette::Diagnostic;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wikijs_mcp::config::{ConfigError, WikiConfig};
use wikijs_mcp::mcp::McpServer;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("MCP transport error: {0}")]
    #[diagnostic(code(wikijs_mcp::binary::transport))]
    Transport(String),
}

#[derive(Parser)]
#[command(name = "wikijs-mcp")]
#[command(author, version, about = "Wiki.js MCP server (stdio)", long_about = None)]
struct Cli {
    /// Wiki.js base URL (default: WIKIJS_URL env)
    #[arg(long)]
    url: Option<String>,

    /// Wiki.js API key (default: WIKIJS_API_KEY env)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // stdout is the protocol channel; log to stderr only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "wikijs_mcp=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    serve(Cli::parse()).await?;
    Ok(())
}

async fn serve(cli: Cli) -> Result<(), BinaryError> {
    let config = WikiConfig::from_env()?.with_overrides(cli.url, cli.api_key);
    config.validate()?;

    info!(wiki = %config.url, "starting Wiki.js MCP server on stdio");

    let server = McpServer::new(config)
        .serve(stdio())
        .await
        .map_err(|e| BinaryError::Transport(e.to_string()))?;

    server
        .waiting()
        .await
        .map_err(|e| BinaryError::Transport(e.to_string()))?;

    info!("Wiki.js MCP server stopped");
    Ok(())
}
