//! Google Custom Search provider.
//!
//! API reference: https://developers.google.com/custom-search/v1/reference/rest/v1/cse/list

use crate::client::SearchClient;
use crate::types::SearchResult;
use reqwest::StatusCode;
use scout_core::config::MAX_RESULT_COUNT;
use scout_core::{AppError, AppResult, SearchConfig, SearchError};
use serde::Deserialize;
use std::time::Duration;

const MIN_QUERY_CHARS: usize = 2;
const MAX_QUERY_CHARS: usize = 500;

/// Custom Search response body.
#[derive(Debug, Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    items: Option<Vec<GoogleItem>>,
    #[serde(default)]
    error: Option<GoogleApiError>,
}

#[derive(Debug, Deserialize)]
struct GoogleItem {
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
}

/// Error body, returned with non-2xx statuses and occasionally with 200.
#[derive(Debug, Default, Deserialize)]
struct GoogleApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<GoogleErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    #[serde(default)]
    reason: String,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleApiError,
}

impl GoogleApiError {
    fn reason(&self) -> &str {
        self.errors
            .first()
            .map(|detail| detail.reason.as_str())
            .unwrap_or("unknown")
    }
}

/// Google Custom Search client.
pub struct GoogleSearchClient {
    /// Endpoint URL
    endpoint: String,

    /// API key (`key` parameter)
    api_key: String,

    /// Search engine id (`cx` parameter)
    search_engine_id: String,

    /// Configured request timeout, kept for error messages
    timeout: Duration,

    /// HTTP client
    client: reqwest::Client,
}

impl GoogleSearchClient {
    /// Create a client from search configuration.
    ///
    /// Fails with a configuration error when credentials are missing or the
    /// endpoint is not a valid URL.
    pub fn new(config: &SearchConfig) -> AppResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "Google search requires an API key in {}",
                    config.api_key_env
                ))
            })?;

        let search_engine_id = config
            .search_engine_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::Config("Google search requires a search engine id".to_string())
            })?;

        if config.timeout_secs == 0 {
            return Err(AppError::Config(
                "Search timeout must be at least one second".to_string(),
            ));
        }

        url::Url::parse(&config.endpoint).map_err(|e| {
            AppError::Config(format!(
                "Invalid search endpoint '{}': {}",
                config.endpoint, e
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!("Google search client ready (endpoint: {})", config.endpoint);

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key: api_key.to_string(),
            search_engine_id: search_engine_id.to_string(),
            timeout: config.timeout(),
            client,
        })
    }

    /// Map a transport failure to a search error.
    fn transport_error(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::Unavailable(format!(
                "request timed out after {}s",
                self.timeout.as_secs()
            ))
        } else if err.is_connect() {
            SearchError::Unavailable(format!("connection failed: {}", err))
        } else {
            SearchError::Unavailable(format!("request failed: {}", err))
        }
    }
}

/// Trim the query and check bounds before anything goes on the wire.
fn validate_request(query: &str, count: u32) -> Result<&str, SearchError> {
    let query = query.trim();
    let chars = query.chars().count();

    if chars < MIN_QUERY_CHARS {
        return Err(SearchError::InvalidRequest(format!(
            "query must be at least {} characters",
            MIN_QUERY_CHARS
        )));
    }

    if chars > MAX_QUERY_CHARS {
        return Err(SearchError::InvalidRequest(format!(
            "query is too long ({} characters, maximum {})",
            chars, MAX_QUERY_CHARS
        )));
    }

    if count == 0 || count > MAX_RESULT_COUNT {
        return Err(SearchError::InvalidRequest(format!(
            "result count must be between 1 and {}, got {}",
            MAX_RESULT_COUNT, count
        )));
    }

    Ok(query)
}

/// Classify a non-success response.
fn classify_status(status: StatusCode, body: &str) -> SearchError {
    let api_error = serde_json::from_str::<GoogleErrorEnvelope>(body)
        .map(|envelope| envelope.error)
        .unwrap_or_default();
    let reason = api_error.reason().to_lowercase();
    let detail = if api_error.message.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("HTTP {}: {}", status.as_u16(), api_error.message)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => SearchError::QuotaExceeded(detail),
        StatusCode::UNAUTHORIZED => SearchError::Authentication(detail),
        StatusCode::FORBIDDEN if reason.contains("quota") || reason.contains("limit") => {
            SearchError::QuotaExceeded(detail)
        }
        StatusCode::FORBIDDEN => SearchError::Authentication(detail),
        StatusCode::BAD_REQUEST
            if reason.contains("keyinvalid")
                || api_error.message.to_lowercase().contains("api key") =>
        {
            SearchError::Authentication(detail)
        }
        s if s.is_server_error() => SearchError::Unavailable(detail),
        s if s.is_client_error() => SearchError::InvalidRequest(detail),
        _ => SearchError::Unavailable(detail),
    }
}

/// Parse a 200 body into ranked results.
fn parse_results(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let response: GoogleResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::MalformedResponse(format!("invalid JSON body: {}", e)))?;

    if let Some(error) = response.error {
        return Err(SearchError::MalformedResponse(format!(
            "error object in successful response: {} ({})",
            error.message,
            error.reason()
        )));
    }

    let results = response
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|item| SearchResult {
            title: item.title.unwrap_or_else(|| "No title".to_string()),
            snippet: item.snippet.unwrap_or_default(),
            url: item.link.unwrap_or_default(),
        })
        .collect();

    Ok(results)
}

#[async_trait::async_trait]
impl SearchClient for GoogleSearchClient {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn search(&self, query: &str, count: u32) -> Result<Vec<SearchResult>, SearchError> {
        let query = validate_request(query, count)?;

        tracing::info!("Sending search request to Google");
        tracing::debug!("Query: {:?}, count: {}", query, count);

        let num = count.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.search_engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let err = classify_status(status, &body);
            tracing::warn!("Google search failed ({}): {}", err.kind(), err);
            return Err(err);
        }

        let results = parse_results(&body)?;

        if results.is_empty() {
            tracing::info!("Google returned no results");
        } else {
            tracing::info!("Received {} results from Google", results.len());
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::SearchErrorKind;

    fn config() -> SearchConfig {
        SearchConfig {
            api_key: Some("AIzaSyTESTKEY0123456789abcdef".to_string()),
            search_engine_id: Some("0123456789abcdef0".to_string()),
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_client_creation() {
        let client = GoogleSearchClient::new(&config()).unwrap();
        assert_eq!(client.provider_name(), "google");
        assert_eq!(client.endpoint, scout_core::config::DEFAULT_ENDPOINT);
        assert_eq!(client.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_client_requires_credentials() {
        let mut missing_key = config();
        missing_key.api_key = Some("   ".to_string());
        assert!(matches!(
            GoogleSearchClient::new(&missing_key),
            Err(AppError::Config(_))
        ));

        let mut missing_cx = config();
        missing_cx.search_engine_id = None;
        assert!(GoogleSearchClient::new(&missing_cx).is_err());
    }

    #[test]
    fn test_client_rejects_bad_endpoint() {
        let mut bad = config();
        bad.endpoint = "not a url".to_string();
        assert!(GoogleSearchClient::new(&bad).is_err());
    }

    #[test]
    fn test_client_rejects_zero_timeout() {
        let mut unbounded = config();
        unbounded.timeout_secs = 0;
        assert!(matches!(
            GoogleSearchClient::new(&unbounded),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_validate_request() {
        assert_eq!(validate_request("  rust news  ", 5).unwrap(), "rust news");
        assert!(validate_request("a", 5).is_err());
        assert!(validate_request(&"x".repeat(501), 5).is_err());
        assert!(validate_request("rust", 0).is_err());
        assert!(validate_request("rust", 11).is_err());
    }

    #[test]
    fn test_classify_rate_limit() {
        let err = classify_status(StatusCode::TOO_MANY_REQUESTS, "");
        assert_eq!(err.kind(), SearchErrorKind::QuotaExceeded);
    }

    #[test]
    fn test_classify_forbidden_by_reason() {
        let quota = r#"{"error":{"code":403,"message":"Daily Limit Exceeded","errors":[{"reason":"dailyLimitExceeded"}]}}"#;
        assert_eq!(
            classify_status(StatusCode::FORBIDDEN, quota).kind(),
            SearchErrorKind::QuotaExceeded
        );

        let denied = r#"{"error":{"code":403,"message":"Forbidden","errors":[{"reason":"forbidden"}]}}"#;
        assert_eq!(
            classify_status(StatusCode::FORBIDDEN, denied).kind(),
            SearchErrorKind::Authentication
        );

        // Unparseable error bodies still classify by status
        assert_eq!(
            classify_status(StatusCode::FORBIDDEN, "<html>").kind(),
            SearchErrorKind::Authentication
        );
    }

    #[test]
    fn test_classify_bad_request() {
        let bad_key = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","errors":[{"reason":"badRequest"}]}}"#;
        assert_eq!(
            classify_status(StatusCode::BAD_REQUEST, bad_key).kind(),
            SearchErrorKind::Authentication
        );

        let bad_param = r#"{"error":{"code":400,"message":"Invalid Value","errors":[{"reason":"invalid"}]}}"#;
        let err = classify_status(StatusCode::BAD_REQUEST, bad_param);
        assert_eq!(err.kind(), SearchErrorKind::InvalidRequest);
        assert!(err.to_string().contains("Invalid Value"));
    }

    #[test]
    fn test_classify_server_error() {
        assert_eq!(
            classify_status(StatusCode::SERVICE_UNAVAILABLE, "").kind(),
            SearchErrorKind::Unavailable
        );
    }

    #[test]
    fn test_parse_results_preserves_order_and_defaults() {
        let body = r#"{
            "items": [
                {"title": "First", "snippet": "one", "link": "https://a.example/1"},
                {"snippet": "two", "link": "https://b.example/2"},
                {"title": "Third"}
            ]
        }"#;

        let results = parse_results(body).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "First");
        assert_eq!(results[1].title, "No title");
        assert_eq!(results[1].url, "https://b.example/2");
        assert_eq!(results[2].snippet, "");
        assert_eq!(results[2].url, "");
    }

    #[test]
    fn test_parse_results_without_items() {
        let body = r#"{"kind": "customsearch#search", "searchInformation": {"totalResults": "0"}}"#;
        assert!(parse_results(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_results_malformed() {
        assert_eq!(
            parse_results("{not json").unwrap_err().kind(),
            SearchErrorKind::MalformedResponse
        );

        let embedded = r#"{"error": {"message": "Backend Error", "errors": [{"reason": "backendError"}]}}"#;
        assert_eq!(
            parse_results(embedded).unwrap_err().kind(),
            SearchErrorKind::MalformedResponse
        );
    }
}
