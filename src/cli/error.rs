use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Invalid JSON arguments: {source}")]
    #[diagnostic(
        code(wikijs_mcp::cli::invalid_arguments),
        help("Pass a JSON object, e.g. --args '{{\"query\": \"install\", \"limit\": 5}}'")
    )]
    InvalidArguments {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("{message}")]
    #[diagnostic(
        code(wikijs_mcp::cli::tool_failed),
        help("Run `wikijs tools` to list the available tools and their purpose.")
    )]
    ToolFailed { tool: String, message: String },

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(wikijs_mcp::cli::output))]
    Output(#[source] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
