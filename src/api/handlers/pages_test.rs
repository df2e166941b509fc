//! Integration tests for the REST endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use crate::api::{AppState, create_router};
use crate::config::WikiConfig;
use crate::wiki::test_support::{MockWiki, page_json, response_result};

fn test_app(config: WikiConfig) -> axum::Router {
    create_router(AppState::new(config), CancellationToken::new())
}

/// Helper to parse JSON response body
async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

// =============================================================================
// System
// =============================================================================

#[tokio::test]
async fn health_reports_healthy() {
    let response = test_app(WikiConfig::default())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"status": "healthy", "service": "wikijs-mcp"})
    );
}

#[tokio::test]
async fn tools_lists_every_tool_with_route() {
    let response = test_app(WikiConfig::default())
        .oneshot(Request::builder().uri("/tools").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = json_body(response).await;
    let tools = body["tools"].as_array().expect("Expected array");
    assert_eq!(tools.len(), 8);
    assert_eq!(tools[0]["name"], "wiki_search");
    assert_eq!(tools[0]["path"], "/search");
    assert!(tools.iter().any(|t| t["path"] == "/page/move"));
}

#[tokio::test]
async fn docs_are_served() {
    let response = test_app(WikiConfig::default())
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// POST /page
// =============================================================================

#[tokio::test]
async fn get_page_with_path_and_id_is_bad_request() {
    let mock = MockWiki::with_data(|_, _| json!({})).await;

    let response = test_app(mock.config())
        .oneshot(post_json("/page", json!({"path": "a", "id": 1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Cannot specify both 'path' and 'id' parameters - use only one"
    );
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn get_page_missing_is_not_found() {
    let mock = MockWiki::with_data(|_, _| json!({"pages": {"single": null}})).await;

    let response = test_app(mock.config())
        .oneshot(post_json("/page", json!({"id": 77})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "Page not found");
}

#[tokio::test]
async fn get_page_returns_typed_page() {
    let mock =
        MockWiki::with_data(|_, _| json!({"pages": {"singleByPath": page_json(4, "docs/a", "A")}}))
            .await;

    let response = test_app(mock.config())
        .oneshot(post_json("/page", json!({"path": "docs/a"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["page"]["id"], 4);
    assert_eq!(body["page"]["authorName"], "Administrator");
}

// =============================================================================
// Search / listing
// =============================================================================

#[tokio::test]
async fn search_reports_fallback_strategy() {
    let mock = MockWiki::start(|op, _| match op {
        "SearchPages" => (StatusCode::OK, json!({"errors": [{"message": "search engine offline"}]})),
        _ => (
            StatusCode::OK,
            json!({"data": {"pages": {"list": [
                {"id": 1, "path": "install", "title": "Install"},
                {"id": 2, "path": "other", "title": "Other"}
            ]}}}),
        ),
    })
    .await;

    let response = test_app(mock.config())
        .oneshot(post_json("/search", json!({"query": "install"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["strategy"], "fallback");
    assert_eq!(body["message"], "Found 1 pages for query 'install'");
    assert_eq!(body["results"][0]["id"], "1");
}

#[tokio::test]
async fn list_pages_empty_message() {
    let mock = MockWiki::with_data(|_, _| json!({"pages": {"list": []}})).await;

    let response = test_app(mock.config())
        .oneshot(post_json("/pages", json!({})))
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["message"], "No pages found");
    assert_eq!(body["pages"], json!([]));
}

#[tokio::test]
async fn unconfigured_wiki_is_server_error() {
    let response = test_app(WikiConfig::default())
        .oneshot(post_json("/pages", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        json_body(response).await["error"]
            .as_str()
            .unwrap()
            .contains("WIKIJS_URL")
    );
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn create_failure_is_server_error_with_upstream_message() {
    let mock = MockWiki::with_data(|_, _| {
        json!({"pages": {"create": {"responseResult": response_result(false, "slug taken"), "page": null}}})
    })
    .await;

    let response = test_app(mock.config())
        .oneshot(post_json(
            "/page/create",
            json!({"path": "docs/x", "title": "X", "content": "body"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await["error"],
        "Failed to create page: slug taken"
    );
}

#[tokio::test]
async fn update_missing_page_is_not_found() {
    let mock = MockWiki::with_data(|_, _| json!({"pages": {"single": null}})).await;

    let response = test_app(mock.config())
        .oneshot(post_json("/page/update", json!({"id": "5", "title": "T"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(mock.operations(), vec!["GetPageById"]);
}

#[tokio::test]
async fn delete_returns_upstream_result() {
    let mock = MockWiki::with_data(|_, _| {
        json!({"pages": {"delete": {"responseResult": response_result(true, "Page deleted")}}})
    })
    .await;

    let response = test_app(mock.config())
        .oneshot(post_json("/page/delete", json!({"id": 3})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["result"]["message"], "Page deleted");
}

#[tokio::test]
async fn move_with_blank_destination_is_bad_request() {
    let mock = MockWiki::with_data(|_, _| json!({})).await;

    let response = test_app(mock.config())
        .oneshot(post_json("/page/move", json!({"id": 3, "destination_path": "  "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(mock.requests().is_empty());
}
