//! Google provider against a local mock of the Custom Search API.

use scout_core::{SearchConfig, SearchErrorKind};
use scout_search::{GoogleSearchClient, SearchClient};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "AIzaSyTESTKEY0123456789abcdef";
const CX: &str = "0123456789abcdef0";

fn client_for(server: &MockServer, timeout_secs: u64) -> GoogleSearchClient {
    let config = SearchConfig {
        api_key: Some(KEY.to_string()),
        search_engine_id: Some(CX.to_string()),
        endpoint: format!("{}/customsearch/v1", server.uri()),
        timeout_secs,
        ..SearchConfig::default()
    };
    GoogleSearchClient::new(&config).unwrap()
}

fn error_body(code: u16, message: &str, reason: &str) -> serde_json::Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "errors": [{ "message": message, "domain": "global", "reason": reason }]
        }
    })
}

#[tokio::test]
async fn test_search_sends_credentials_and_parses_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("key", KEY))
        .and(query_param("cx", CX))
        .and(query_param("q", "latest rust release"))
        .and(query_param("num", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "customsearch#search",
            "items": [
                {
                    "title": "Announcing Rust 1.90",
                    "snippet": "The Rust team is happy to announce a new version.",
                    "link": "https://blog.rust-lang.org/2025/09/18/Rust-1.90.0/"
                },
                {
                    "title": "Rust releases",
                    "snippet": "A list of all Rust releases.",
                    "link": "https://releases.rs/"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 5);
    let results = client.search("  latest rust release ", 3).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Announcing Rust 1.90");
    assert_eq!(results[1].url, "https://releases.rs/");
}

#[tokio::test]
async fn test_zero_matches_is_empty_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "customsearch#search",
            "searchInformation": { "totalResults": "0" }
        })))
        .mount(&server)
        .await;

    let results = client_for(&server, 5)
        .search("zxqvwy plorble", 5)
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_status_classification() {
    let cases: [(u16, serde_json::Value, SearchErrorKind); 6] = [
        (
            429,
            error_body(429, "Rate Limit Exceeded", "rateLimitExceeded"),
            SearchErrorKind::QuotaExceeded,
        ),
        (
            403,
            error_body(403, "Daily Limit Exceeded", "dailyLimitExceeded"),
            SearchErrorKind::QuotaExceeded,
        ),
        (
            403,
            error_body(403, "The caller does not have permission", "forbidden"),
            SearchErrorKind::Authentication,
        ),
        (
            400,
            error_body(400, "API key not valid. Please pass a valid API key.", "badRequest"),
            SearchErrorKind::Authentication,
        ),
        (
            400,
            error_body(400, "Invalid Value", "invalid"),
            SearchErrorKind::InvalidRequest,
        ),
        (
            503,
            error_body(503, "Backend Error", "backendError"),
            SearchErrorKind::Unavailable,
        ),
    ];

    for (status, body, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&server)
            .await;

        let err = client_for(&server, 5)
            .search("current prices", 5)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), expected, "status {}", status);
    }
}

#[tokio::test]
async fn test_unparseable_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server, 5)
        .search("latest news", 5)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::MalformedResponse);
}

#[tokio::test]
async fn test_timeout_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "items": [] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = client_for(&server, 1)
        .search("latest news", 5)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::Unavailable);
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn test_invalid_query_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server, 5).search(" ", 5).await.unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::InvalidRequest);
}

#[tokio::test]
async fn test_health_check_uses_single_result_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "test"))
        .and(query_param("num", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client_for(&server, 5).health_check().await.is_ok());
}
