//! Wiki.js HTTP server binary.
//!
//! Serves the REST endpoints and the MCP Streamable HTTP transport at `/mcp`.

use std::net::IpAddr;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use wikijs_mcp::api::{self, ApiError, Config};
use wikijs_mcp::config::{ConfigError, WikiConfig};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("API server error: {0}")]
    #[diagnostic(code(wikijs_mcp::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "wikijs-api")]
#[command(author, version, about = "Wiki.js REST and MCP HTTP server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, env = "HTTP_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "HTTP_PORT", default_value_t = api::DEFAULT_PORT)]
    port: u16,

    /// Allowed CORS origins, comma separated
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    cors_origins: String,

    /// Wiki.js base URL (default: WIKIJS_URL env)
    #[arg(long)]
    url: Option<String>,

    /// Wiki.js API key (default: WIKIJS_API_KEY env)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    let wiki = WikiConfig::from_env()?.with_overrides(cli.url, cli.api_key);
    wiki.validate()?;

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
            cors_origins: Config::parse_origins(&cli.cors_origins),
        },
        wiki,
    )
    .await?;

    Ok(())
}
