//! Search client abstraction.

use crate::types::SearchResult;
use scout_core::SearchError;

/// Trait for web search providers.
///
/// Implementations must be safe to share between tasks: the assistant holds
/// one client behind an `Arc` and may call it from concurrent requests.
#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    /// Get the provider name (e.g., "google").
    fn provider_name(&self) -> &str;

    /// Run one search.
    ///
    /// # Arguments
    /// * `query` - Search text
    /// * `count` - Number of results to request
    ///
    /// # Returns
    /// Results in provider ranking order. Zero matches is an empty vector,
    /// not an error.
    async fn search(&self, query: &str, count: u32) -> Result<Vec<SearchResult>, SearchError>;

    /// Check that the provider accepts our credentials.
    ///
    /// The default issues a one-result search and discards the hits.
    async fn health_check(&self) -> Result<(), SearchError> {
        self.search("test", 1).await.map(|_| ())
    }
}
