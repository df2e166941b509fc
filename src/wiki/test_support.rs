//! In-process mock of the Wiki.js GraphQL endpoint for tests.
//!
//! Binds an axum server on an ephemeral localhost port, records every request
//! and answers through a scripted responder keyed on the operation name.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::post,
};
use serde_json::{Value, json};
use tokio::task::JoinHandle;

use crate::config::WikiConfig;
use crate::wiki::queries;

pub const TEST_API_KEY: &str = "test-api-key-123";

/// One request received by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub operation: String,
    pub authorization: Option<String>,
    pub body: Value,
}

impl RecordedRequest {
    pub fn variables(&self) -> &Value {
        &self.body["variables"]
    }
}

type Responder = Arc<dyn Fn(&str, &Value) -> (StatusCode, Value) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Responder,
}

pub struct MockWiki {
    url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockWiki {
    /// Start a mock whose responder receives `(operation_name, variables)`.
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&str, &Value) -> (StatusCode, Value) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: Arc::clone(&requests),
            responder: Arc::new(responder),
        };
        let app = Router::new()
            .route("/graphql", post(handle_graphql))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            requests,
            handle,
        }
    }

    /// Mock answering every operation with `200 {"data": data}`.
    pub async fn with_data<F>(data: F) -> Self
    where
        F: Fn(&str, &Value) -> Value + Send + Sync + 'static,
    {
        Self::start(move |op, vars| (StatusCode::OK, json!({ "data": data(op, vars) }))).await
    }

    pub fn config(&self) -> WikiConfig {
        WikiConfig::new(self.url.clone(), TEST_API_KEY)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.operation).collect()
    }
}

impl Drop for MockWiki {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_graphql(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let operation = body["query"]
        .as_str()
        .and_then(queries::operation_name)
        .unwrap_or("anonymous")
        .to_string();
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let (status, response) = (state.responder)(&operation, &body["variables"]);

    state.requests.lock().unwrap().push(RecordedRequest {
        operation,
        authorization,
        body,
    });

    (status, Json(response))
}

/// A page as `pages.single` / `pages.singleByPath` returns it.
pub fn page_json(id: i64, path: &str, title: &str) -> Value {
    json!({
        "id": id,
        "path": path,
        "title": title,
        "description": format!("About {title}"),
        "content": format!("# {title}\n\nBody of {title}."),
        "contentType": "markdown",
        "isPublished": true,
        "isPrivate": false,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z",
        "editor": "markdown",
        "locale": "en",
        "authorId": 1,
        "authorName": "Administrator",
        "authorEmail": "admin@example.com",
        "creatorId": 1,
        "creatorName": "Administrator",
        "creatorEmail": "admin@example.com",
        "tags": [{"id": 1, "tag": "docs", "title": "Docs"}]
    })
}

/// `responseResult` envelope.
pub fn response_result(succeeded: bool, message: &str) -> Value {
    json!({
        "succeeded": succeeded,
        "errorCode": if succeeded { 0 } else { 6001 },
        "slug": if succeeded { "ok" } else { "error" },
        "message": message
    })
}
