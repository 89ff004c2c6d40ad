//! Turns ranked search results into a single cited answer.
//!
//! Synthesis is ordered concatenation: snippets of the top results are
//! cleaned, trimmed to a readable length and joined in ranking order. A
//! result is cited only if its snippet made it into the summary, so every
//! cited URL is one the provider returned and that added text.

use crate::answer::Answer;
use scout_search::SearchResult;
use std::collections::HashSet;

/// Longest snippet kept verbatim, in characters.
pub const MAX_SNIPPET_CHARS: usize = 250;

/// A sentence break earlier than this (in characters) is not used for trimming.
const MIN_SENTENCE_BREAK: usize = 100;

const SENTENCE_ENDS: [char; 4] = ['.', '!', '?', ';'];

/// Builds answers from at most `max_results` results.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    max_results: usize,
}

impl Synthesizer {
    /// Create a synthesizer that reads at most `max_results` results (at least one).
    pub fn new(max_results: usize) -> Self {
        Self {
            max_results: max_results.max(1),
        }
    }

    /// Maximum number of results considered.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Summarize `results` into an answer for `question`.
    ///
    /// Empty input, or input where no result has both text and a URL,
    /// yields [`Answer::no_information`].
    pub fn summarize(&self, results: &[SearchResult], question: &str) -> Answer {
        if results.is_empty() {
            tracing::debug!("No results to summarize for {:?}", question);
            return Answer::no_information();
        }

        let mut parts = Vec::new();
        let mut sources = Vec::new();
        let mut seen = HashSet::new();

        for (rank, result) in results.iter().take(self.max_results).enumerate() {
            let url = result.url.trim();
            if url.is_empty() {
                tracing::debug!("Skipping result {} without a URL", rank + 1);
                continue;
            }

            let Some(snippet) = clean_snippet(&result.snippet) else {
                tracing::debug!("Skipping result {} without snippet text", rank + 1);
                continue;
            };

            parts.push(finish_sentence(&truncate_snippet(&snippet)));

            if seen.insert(result.url.as_str()) {
                sources.push(result.url.clone());
            }
        }

        if parts.is_empty() {
            tracing::info!("No usable snippets among {} results", results.len());
            return Answer::no_information();
        }

        tracing::debug!(
            "Summarized {} snippets from {} sources for {:?}",
            parts.len(),
            sources.len(),
            question
        );

        Answer::new(parts.join(" "), sources)
    }
}

/// Collapse runs of whitespace; `None` if no word character is left.
fn clean_snippet(snippet: &str) -> Option<String> {
    let cleaned = snippet.split_whitespace().collect::<Vec<_>>().join(" ");
    cleaned
        .chars()
        .any(char::is_alphanumeric)
        .then_some(cleaned)
}

/// Cut long snippets at the last sentence end inside the window, or hard-cut with an ellipsis.
fn truncate_snippet(snippet: &str) -> String {
    if snippet.chars().count() <= MAX_SNIPPET_CHARS {
        return snippet.to_string();
    }

    let window: String = snippet.chars().take(MAX_SNIPPET_CHARS).collect();

    let sentence_end = window
        .char_indices()
        .enumerate()
        .filter(|(pos, (_, c))| *pos >= MIN_SENTENCE_BREAK && SENTENCE_ENDS.contains(c))
        .map(|(_, (byte, c))| byte + c.len_utf8())
        .last();

    match sentence_end {
        Some(end) => window[..end].to_string(),
        None => {
            let head: String = window.chars().take(MAX_SNIPPET_CHARS - 3).collect();
            format!("{}...", head.trim_end())
        }
    }
}

/// Make sure a summary part ends like a sentence.
fn finish_sentence(part: &str) -> String {
    let trimmed = part.trim_end_matches([',', ':', ';', ' ']);
    match trimmed.chars().last() {
        Some('.') | Some('!') | Some('?') => trimmed.to_string(),
        _ => format!("{}.", trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(snippet: &str, url: &str) -> SearchResult {
        SearchResult::new("title", snippet, url)
    }

    #[test]
    fn test_empty_results() {
        let answer = Synthesizer::new(5).summarize(&[], "anything at all");
        assert_eq!(answer, Answer::no_information());
    }

    #[test]
    fn test_concatenates_in_rank_order() {
        let results = vec![
            result("AWS exams are discounted 50% in May.", "https://a.example/1"),
            result("Vouchers   expire\n after 90 days", "https://b.example/2"),
        ];

        let answer = Synthesizer::new(5).summarize(&results, "aws discounts");
        assert_eq!(
            answer.text,
            "AWS exams are discounted 50% in May. Vouchers expire after 90 days."
        );
        assert_eq!(answer.sources, vec!["https://a.example/1", "https://b.example/2"]);
    }

    #[test]
    fn test_deduplicates_sources_in_first_order() {
        let results = vec![
            result("First fact.", "https://a.example/"),
            result("Second fact.", "https://b.example/"),
            result("Third fact.", "https://a.example/"),
        ];

        let answer = Synthesizer::new(5).summarize(&results, "q");
        assert_eq!(answer.sources, vec!["https://a.example/", "https://b.example/"]);
        assert!(answer.text.contains("Third fact."));
    }

    #[test]
    fn test_non_contributing_results_are_not_cited() {
        let results = vec![
            result("   ", "https://empty.example/"),
            result("Useful text.", "https://useful.example/"),
            result("Text without a link.", ""),
        ];

        let answer = Synthesizer::new(5).summarize(&results, "q");
        assert_eq!(answer.text, "Useful text.");
        assert_eq!(answer.sources, vec!["https://useful.example/"]);
    }

    #[test]
    fn test_punctuation_only_snippets_are_not_cited() {
        let results = vec![
            result(" ; ", "https://noise.example/"),
            result(",", "https://comma.example/"),
            result("Real text.", "https://real.example/"),
        ];

        let answer = Synthesizer::new(5).summarize(&results, "q");
        assert_eq!(answer.text, "Real text.");
        assert_eq!(answer.sources, vec!["https://real.example/"]);

        let noise = vec![result(" ; ", "https://noise.example/")];
        assert_eq!(
            Synthesizer::new(5).summarize(&noise, "q"),
            Answer::no_information()
        );
    }

    #[test]
    fn test_nothing_usable_is_no_information() {
        let results = vec![result("", "https://a.example/"), result("text", "")];
        let answer = Synthesizer::new(5).summarize(&results, "q");
        assert_eq!(answer, Answer::no_information());
    }

    #[test]
    fn test_respects_max_results() {
        let results = vec![
            result("One.", "https://1.example/"),
            result("Two.", "https://2.example/"),
            result("Three.", "https://3.example/"),
        ];

        let answer = Synthesizer::new(2).summarize(&results, "q");
        assert_eq!(answer.text, "One. Two.");
        assert_eq!(answer.sources.len(), 2);
        assert_eq!(Synthesizer::new(0).max_results(), 1);
    }

    #[test]
    fn test_cited_urls_come_from_results() {
        let results = vec![
            result("Alpha.", "https://a.example/x?y=1"),
            result("", "https://b.example/"),
            result("Gamma.", "https://c.example/"),
        ];

        let answer = Synthesizer::new(5).summarize(&results, "q");
        for url in &answer.sources {
            assert!(results.iter().any(|r| &r.url == url));
        }
        assert!(!answer.sources.contains(&"https://b.example/".to_string()));
    }

    #[test]
    fn test_truncate_at_sentence_end() {
        let first = "a".repeat(120) + ".";
        let snippet = format!("{} {}", first, "b".repeat(200));
        assert_eq!(truncate_snippet(&snippet), first);
    }

    #[test]
    fn test_truncate_ignores_early_break() {
        let snippet = format!("Short. {}", "c".repeat(300));
        let truncated = truncate_snippet(&snippet);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), MAX_SNIPPET_CHARS);
    }

    #[test]
    fn test_truncate_multibyte() {
        let snippet = "é".repeat(400);
        let truncated = truncate_snippet(&snippet);
        assert_eq!(truncated.chars().count(), MAX_SNIPPET_CHARS);
    }

    #[test]
    fn test_finish_sentence() {
        assert_eq!(finish_sentence("Done"), "Done.");
        assert_eq!(finish_sentence("Done!"), "Done!");
        assert_eq!(finish_sentence("Listed;"), "Listed.");
        assert_eq!(finish_sentence("Wait..."), "Wait...");
    }
}
