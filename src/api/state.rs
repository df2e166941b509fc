//! Application state for the API server.

use std::sync::Arc;

use crate::config::WikiConfig;
use crate::wiki::{WikiClient, WikiResult};

/// Shared application state.
///
/// Holds only the Wiki.js configuration; each request opens its own
/// [`WikiClient`] and drops it when the response is sent.
#[derive(Clone)]
pub struct AppState {
    config: Arc<WikiConfig>,
}

impl AppState {
    pub fn new(config: impl Into<Arc<WikiConfig>>) -> Self {
        Self {
            config: config.into(),
        }
    }

    /// Cloned handle to the configuration, for the MCP service factory.
    pub fn config_arc(&self) -> Arc<WikiConfig> {
        Arc::clone(&self.config)
    }

    /// Open a client for one request.
    pub fn client(&self) -> WikiResult<WikiClient> {
        WikiClient::new(&self.config)
    }
}
