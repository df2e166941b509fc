//! Error types for Wiki.js operations.
//!
//! Every failure a tool call can hit converges on [`WikiError`]: argument
//! validation, HTTP transport, GraphQL `errors` payloads and failed
//! `responseResult` envelopes. A page that simply does not exist on a read is
//! not an error; reads return `Option`.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Wiki.js operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum WikiError {
    #[error("{message}")]
    #[diagnostic(code(wikijs_mcp::wiki::validation))]
    Validation { message: String },

    #[error("API request failed: {status}")]
    #[diagnostic(
        code(wikijs_mcp::wiki::transport),
        help("Check WIKIJS_URL, WIKIJS_GRAPHQL_ENDPOINT and that the API key is still valid.")
    )]
    Transport { status: u16, body: String },

    #[error("GraphQL query failed: {}", join_messages(.errors))]
    #[diagnostic(code(wikijs_mcp::wiki::graphql))]
    GraphQl { errors: Vec<GraphQlError> },

    #[error("Failed to {action} page: {message}")]
    #[diagnostic(code(wikijs_mcp::wiki::operation_failed))]
    Operation {
        action: &'static str,
        message: String,
    },

    #[error("Page with ID {id} not found")]
    #[diagnostic(code(wikijs_mcp::wiki::page_not_found))]
    PageNotFound { id: i64 },

    #[error("Request failed: {0}")]
    #[diagnostic(code(wikijs_mcp::wiki::request))]
    Request(#[from] reqwest::Error),

    #[error("Invalid response from Wiki.js: {message}")]
    #[diagnostic(code(wikijs_mcp::wiki::invalid_response))]
    InvalidResponse { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

impl WikiError {
    pub fn validation(message: impl Into<String>) -> Self {
        WikiError::Validation {
            message: message.into(),
        }
    }

    /// True for failures caused by the caller's arguments rather than upstream.
    pub fn is_validation(&self) -> bool {
        matches!(self, WikiError::Validation { .. })
    }
}

impl From<serde_json::Error> for WikiError {
    fn from(e: serde_json::Error) -> Self {
        WikiError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

/// Result type for Wiki.js operations.
pub type WikiResult<T> = Result<T, WikiError>;
