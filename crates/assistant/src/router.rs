//! Decides whether a question needs live information.

/// Substrings that mark a question as time-sensitive.
pub const DEFAULT_TRIGGER_TERMS: &[&str] = &[
    "latest",
    "current",
    "recent",
    "today",
    "this month",
    "this year",
    "now",
    "discount",
    "price",
    "pricing",
    "cost",
    "deal",
    "new",
    "updated",
    "announcement",
    "news",
    "breaking",
    "voucher",
    "promotion",
    "sale",
    "availability",
    "available",
    "release",
    "launched",
    "upcoming",
    "how much",
    "when is",
    "when will",
    "when can",
];

/// Keyword router over an immutable set of trigger terms.
///
/// A question needs a search when any term occurs anywhere in it,
/// compared case-insensitively. Matching is plain substring search, so
/// "prices" matches "price" (and "know" matches "now").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    terms: Vec<String>,
}

impl Router {
    /// Router with the built-in trigger terms.
    pub fn new() -> Self {
        Self::with_terms(DEFAULT_TRIGGER_TERMS.iter().copied())
    }

    /// Router with a custom term set. Terms are lower-cased; blank terms are dropped.
    pub fn with_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !normalized.contains(&term) {
                normalized.push(term);
            }
        }
        Self { terms: normalized }
    }

    /// The active trigger terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// First trigger term found in the question, if any.
    pub fn matched_term(&self, question: &str) -> Option<&str> {
        let question = question.to_lowercase();
        self.terms
            .iter()
            .find(|term| question.contains(term.as_str()))
            .map(String::as_str)
    }

    /// Whether the question requires a live search.
    pub fn needs_search(&self, question: &str) -> bool {
        self.matched_term(question).is_some()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
