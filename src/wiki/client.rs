//! Wiki.js GraphQL gateway.
//!
//! One [`WikiClient`] is opened per tool invocation and dropped with it; the
//! underlying connection pool is never shared across calls. Each call to
//! [`WikiClient::execute`] performs exactly one POST and never retries.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::config::WikiConfig;
use crate::wiki::error::{GraphQlError, WikiError, WikiResult};
use crate::wiki::queries;

/// Install the process-wide rustls crypto provider.
///
/// reqwest is built without a bundled provider; this must run before the first
/// client is constructed. Repeated calls are no-ops.
pub fn init_crypto() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

/// GraphQL client for a single Wiki.js instance.
pub struct WikiClient {
    endpoint: String,
    default_locale: String,
    client: Client,
}

impl WikiClient {
    /// Create a client from configuration.
    ///
    /// Fails when the URL or API key is missing, or the key cannot be used as
    /// a header value.
    pub fn new(config: &WikiConfig) -> WikiResult<Self> {
        config.validate()?;
        init_crypto();

        let mut headers = HeaderMap::new();
        let mut auth =
            HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(|_| {
                WikiError::validation("API key contains characters not allowed in a header")
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            endpoint: config.graphql_url(),
            default_locale: config.default_locale.clone(),
            client,
        })
    }

    /// Full GraphQL endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Locale used when an operation is not given one.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Execute one GraphQL document and return its `data` object.
    ///
    /// - non-2xx status → [`WikiError::Transport`]; the body is not parsed
    /// - non-empty `errors` → [`WikiError::GraphQl`]; `data` is discarded
    /// - missing `data` → empty map
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> WikiResult<Map<String, Value>> {
        let operation = queries::operation_name(query).unwrap_or("anonymous");
        debug!(operation, endpoint = %self.endpoint, "executing GraphQL operation");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(|e| {
                error!(operation, error = %e, "GraphQL request failed");
                WikiError::Request(e)
            })?;

        Self::handle_response(operation, response).await
    }

    /// Execute with a typed variable set from the query catalog.
    pub async fn execute_with<V: Serialize>(
        &self,
        query: &str,
        variables: &V,
    ) -> WikiResult<Map<String, Value>> {
        let variables = serde_json::to_value(variables)?;
        self.execute(query, Some(variables)).await
    }

    async fn handle_response(
        operation: &str,
        response: Response,
    ) -> WikiResult<Map<String, Value>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(operation, status = status.as_u16(), body = %body, "HTTP error from Wiki.js");
            return Err(WikiError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GraphQlResponse = response.json().await.map_err(|e| {
            WikiError::InvalidResponse {
                message: e.to_string(),
            }
        })?;

        match payload.errors {
            Some(errors) if !errors.is_empty() => {
                error!(operation, ?errors, "GraphQL errors");
                Err(WikiError::GraphQl { errors })
            }
            _ => Ok(payload.data.unwrap_or_default()),
        }
    }
}
