use miette::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries tool output; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "wikijs_mcp=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    wikijs_mcp::cli::run().await?;
    Ok(())
}
