//! Web search integration for Scout.
//!
//! This crate wraps third-party search APIs behind the [`SearchClient`]
//! trait. A client issues one query, returns the provider's ranked hits as
//! [`SearchResult`]s and classifies every failure into a
//! [`SearchError`](scout_core::SearchError) kind. Clients never retry.
//!
//! # Providers
//! - **Google**: Custom Search JSON API (default)
//!
//! # Example
//! ```no_run
//! use scout_core::SearchConfig;
//! use scout_search::create_client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = SearchConfig::default();
//! config.api_key = Some("AIza...".into());
//! config.search_engine_id = Some("0123456789abc".into());
//!
//! let client = create_client(&config)?;
//! for hit in client.search("latest rust release", 5).await? {
//!     println!("{} - {}", hit.title, hit.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::SearchClient;
pub use factory::create_client;
pub use providers::GoogleSearchClient;
pub use types::SearchResult;
