//! Search provider factory.
//!
//! Builds the configured search client. Credentials come from the already
//! loaded [`SearchConfig`]; nothing here reads the environment.

use crate::client::SearchClient;
use crate::providers::GoogleSearchClient;
use scout_core::{AppError, AppResult, SearchConfig};
use std::sync::Arc;

/// Create a search client for the configured provider.
///
/// # Errors
/// Returns a configuration error if:
/// - The provider is unknown
/// - Required credentials are missing
/// - The endpoint is not a valid URL
pub fn create_client(config: &SearchConfig) -> AppResult<Arc<dyn SearchClient>> {
    match config.provider.to_lowercase().as_str() {
        "google" => {
            let client = GoogleSearchClient::new(config)?;
            Ok(Arc::new(client))
        }
        other => Err(AppError::Config(format!(
            "Unknown search provider: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SearchConfig {
        SearchConfig {
            api_key: Some("AIzaSyTESTKEY0123456789abcdef".to_string()),
            search_engine_id: Some("0123456789abcdef0".to_string()),
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_create_google_client() {
        let client = create_client(&config()).unwrap();
        assert_eq!(client.provider_name(), "google");
    }

    #[test]
    fn test_provider_name_is_case_insensitive() {
        let mut config = config();
        config.provider = "Google".to_string();
        assert!(create_client(&config).is_ok());
    }

    #[test]
    fn test_google_requires_api_key() {
        let mut config = config();
        config.api_key = None;
        match create_client(&config) {
            Err(err) => assert!(err.to_string().contains("GOOGLE_API_KEY")),
            Ok(_) => panic!("Expected error for Google without API key"),
        }
    }

    #[test]
    fn test_unknown_provider() {
        let mut config = config();
        config.provider = "unknown".to_string();
        match create_client(&config) {
            Err(err) => assert!(err.to_string().contains("Unknown search provider")),
            Ok(_) => panic!("Expected error for unknown provider"),
        }
    }
}
