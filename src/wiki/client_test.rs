//! Tests for the GraphQL gateway

use axum::http::StatusCode;
use serde_json::json;

use crate::config::{ConfigError, WikiConfig};
use crate::wiki::client::WikiClient;
use crate::wiki::error::WikiError;
use crate::wiki::queries;
use crate::wiki::test_support::{MockWiki, TEST_API_KEY};

#[tokio::test]
async fn test_new_rejects_incomplete_config() {
    let err = WikiClient::new(&WikiConfig::default()).err().unwrap();
    assert!(matches!(err, WikiError::Config(ConfigError::MissingUrl)));

    let err = WikiClient::new(&WikiConfig::new("http://wiki.local", ""))
        .err()
        .unwrap();
    assert!(matches!(err, WikiError::Config(ConfigError::MissingApiKey)));
}

#[tokio::test]
async fn test_endpoint_joins_base_url_and_graphql_path() {
    let mut config = WikiConfig::new("https://wiki.example.com/", "key");
    config.graphql_endpoint = "/api/graphql".to_string();
    let client = WikiClient::new(&config).unwrap();
    assert_eq!(client.endpoint(), "https://wiki.example.com/api/graphql");
    assert_eq!(client.default_locale(), "en");
}

#[tokio::test]
async fn test_execute_posts_query_variables_and_bearer_token() {
    let mock = MockWiki::with_data(|_, _| json!({"pages": {"list": []}})).await;
    let client = WikiClient::new(&mock.config()).unwrap();

    let data = client
        .execute(queries::LIST_PAGES, Some(json!({"limit": 5})))
        .await
        .unwrap();

    assert_eq!(data["pages"]["list"], json!([]));
    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].operation, "ListPages");
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some(format!("Bearer {TEST_API_KEY}").as_str())
    );
    assert_eq!(requests[0].body["query"], json!(queries::LIST_PAGES));
    assert_eq!(requests[0].variables(), &json!({"limit": 5}));
}

#[tokio::test]
async fn test_execute_omits_variables_when_none() {
    let mock = MockWiki::with_data(|_, _| json!({})).await;
    let client = WikiClient::new(&mock.config()).unwrap();

    client.execute("{ pages { list { id } } }", None).await.unwrap();

    let body = &mock.requests()[0].body;
    assert!(body.get("variables").is_none());
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let mock =
        MockWiki::start(|_, _| (StatusCode::BAD_GATEWAY, json!({"errors": "ignored"}))).await;
    let client = WikiClient::new(&mock.config()).unwrap();

    let err = client.execute(queries::LIST_PAGES, None).await.unwrap_err();

    match err {
        WikiError::Transport { status, .. } => assert_eq!(status, 502),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_graphql_errors_win_over_partial_data() {
    let mock = MockWiki::start(|_, _| {
        (
            StatusCode::OK,
            json!({
                "data": {"pages": {"list": [{"id": 1}]}},
                "errors": [{"message": "Unknown argument \"offset\" on field \"list\""}]
            }),
        )
    })
    .await;
    let client = WikiClient::new(&mock.config()).unwrap();

    let err = client.execute(queries::LIST_PAGES, None).await.unwrap_err();

    match &err {
        WikiError::GraphQl { errors } => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].message.contains("Unknown argument"));
        }
        other => panic!("expected GraphQL error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("GraphQL query failed:"));
}

#[tokio::test]
async fn test_empty_errors_array_is_success_and_missing_data_is_empty() {
    let mock = MockWiki::start(|_, _| (StatusCode::OK, json!({"errors": []}))).await;
    let client = WikiClient::new(&mock.config()).unwrap();

    let data = client.execute(queries::LIST_PAGES, None).await.unwrap();

    assert!(data.is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = WikiClient::new(&WikiConfig::new(format!("http://{addr}"), "key")).unwrap();
    let err = client.execute(queries::LIST_PAGES, None).await.unwrap_err();

    assert!(matches!(err, WikiError::Request(_)));
}
