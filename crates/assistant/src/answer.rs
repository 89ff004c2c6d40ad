//! Answer type and citation rendering.

use serde::Serialize;

/// Text returned when a search produced nothing usable.
pub const NO_INFORMATION: &str = "I couldn't find any current information about that. \
You might try rephrasing your question or checking official sources directly.";

/// A synthesized answer with the URLs it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// Summary text, without citations
    pub text: String,

    /// Source URLs, unique, in order of first appearance
    pub sources: Vec<String>,
}

impl Answer {
    /// Create a new answer.
    pub fn new(text: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            text: text.into(),
            sources,
        }
    }

    /// The fixed answer for searches that found nothing.
    pub fn no_information() -> Self {
        Self::new(NO_INFORMATION, Vec::new())
    }

    /// Summary followed by a numbered source list.
    pub fn render(&self) -> String {
        if self.sources.is_empty() {
            return self.text.clone();
        }

        let citations = self
            .sources
            .iter()
            .enumerate()
            .map(|(i, url)| format!("{}. {} ({})", i + 1, site_name(url), url))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{}\n\nSources:\n{}", self.text, citations)
    }
}

/// Host of a URL without a leading `www.`, or the URL itself if it has no host.
pub fn site_name(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .map(|host| host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
        .unwrap_or_else(|| url.to_string())
}
