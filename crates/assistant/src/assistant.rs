//! Request orchestration.
//!
//! Each call to [`Assistant::respond`] walks one short path:
//! validate the question, route it, then either answer statically or
//! search and synthesize. Nothing is kept between calls.

use crate::answer::Answer;
use crate::fallback;
use crate::responder::{CannedResponder, StaticResponder};
use crate::router::Router;
use crate::synthesizer::Synthesizer;
use scout_core::{AppConfig, AppError, AppResult, SearchError, SearchErrorKind};
use scout_search::{create_client, SearchClient};
use std::sync::Arc;

/// Reply to an empty question.
pub const CLARIFY: &str = "Your question appears to be empty. Could you please ask me something specific?";

/// Reply to an overly long question.
pub const TOO_LONG: &str = "Your question is quite long. Could you please make it more concise \
(under 1000 characters)?";

/// Reply when the question needs no search and no static answer is known.
pub const NO_STATIC_KNOWLEDGE: &str = "I don't have a stored answer for that. If you need current \
information, such as the latest prices or news, ask for it and I'll search the web.";

/// Longest question accepted, in characters.
pub const MAX_QUESTION_CHARS: usize = 1000;

/// Which path produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The question was empty or unusable
    Clarify,
    /// Answered from static knowledge
    Static,
    /// Answered from search results
    Search,
    /// The search failed; a fallback message was returned
    Fallback(SearchErrorKind),
}

impl Route {
    /// Short label for logs and JSON output.
    pub fn label(&self) -> String {
        match self {
            Self::Clarify => "clarify".to_string(),
            Self::Static => "static".to_string(),
            Self::Search => "search".to_string(),
            Self::Fallback(kind) => format!("fallback:{}", kind),
        }
    }
}

/// A reply with the route taken and the sources cited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show the user
    pub text: String,

    /// Path that produced the text
    pub route: Route,

    /// URLs cited in `text` (search route only)
    pub sources: Vec<String>,
}

impl Reply {
    fn plain(text: impl Into<String>, route: Route) -> Self {
        Self {
            text: text.into(),
            route,
            sources: Vec::new(),
        }
    }

    fn from_answer(answer: Answer) -> Self {
        Self {
            text: answer.render(),
            route: Route::Search,
            sources: answer.sources,
        }
    }
}

/// The question-answering entry point.
///
/// `Assistant` is `Send + Sync` and holds no per-request state, so one
/// instance can serve concurrent callers.
pub struct Assistant {
    client: Arc<dyn SearchClient>,
    router: Router,
    synthesizer: Synthesizer,
    responder: Arc<dyn StaticResponder>,
    result_count: u32,
}

impl Assistant {
    /// Create an assistant around a search client.
    ///
    /// Uses the default router and the canned static responder.
    pub fn new(client: Arc<dyn SearchClient>, result_count: u32) -> Self {
        Self {
            client,
            router: Router::new(),
            synthesizer: Synthesizer::new(result_count as usize),
            responder: Arc::new(CannedResponder::new()),
            result_count,
        }
    }

    /// Replace the router.
    pub fn with_router(mut self, router: Router) -> Self {
        self.router = router;
        self
    }

    /// Replace the static responder.
    pub fn with_responder(mut self, responder: impl StaticResponder + 'static) -> Self {
        self.responder = Arc::new(responder);
        self
    }

    /// Build an assistant from validated configuration.
    ///
    /// # Errors
    /// Returns a configuration error if settings are missing or invalid, or
    /// if the configured provider cannot be constructed.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        config.validate()?;

        let client = create_client(&config.search)?;
        let mut assistant = Self::new(client, config.search.result_count);

        if let Some(terms) = &config.trigger_terms {
            assistant = assistant.with_router(Router::with_terms(terms));
        }

        tracing::info!(
            "Assistant ready (provider: {}, results per search: {})",
            assistant.client.provider_name(),
            assistant.result_count
        );

        Ok(assistant)
    }

    /// Build an assistant and, if configured, verify credentials with the provider.
    pub async fn connect(config: &AppConfig) -> AppResult<Self> {
        let assistant = Self::from_config(config)?;

        if config.validate_credentials {
            tracing::info!("Validating search credentials");
            assistant.check().await.map_err(|e| match e {
                SearchError::Authentication(detail) => {
                    AppError::Config(format!("Search credentials were rejected: {}", detail))
                }
                other => AppError::Search(other),
            })?;
            tracing::info!("Search credentials validated");
        }

        Ok(assistant)
    }

    /// Run the provider health check.
    pub async fn check(&self) -> Result<(), SearchError> {
        self.client.health_check().await
    }

    /// The router in use.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Name of the search provider in use.
    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    /// Answer a question. Never fails; problems become conversational text.
    pub async fn ask(&self, question: &str) -> String {
        self.respond(question).await.text
    }

    /// Answer a question, reporting the route taken and the sources cited.
    pub async fn respond(&self, question: &str) -> Reply {
        let question = question.trim();

        if question.is_empty() {
            tracing::debug!("Empty question");
            return Reply::plain(CLARIFY, Route::Clarify);
        }

        if question.chars().count() > MAX_QUESTION_CHARS {
            tracing::debug!("Question too long ({} chars)", question.chars().count());
            return Reply::plain(TOO_LONG, Route::Clarify);
        }

        tracing::info!("Processing question: {}", preview(question));

        match self.router.matched_term(question) {
            Some(term) => {
                tracing::info!("Question needs live information (matched {:?})", term);
                self.answer_with_search(question).await
            }
            None => {
                tracing::info!("Answering from static knowledge");
                self.answer_static(question)
            }
        }
    }

    fn answer_static(&self, question: &str) -> Reply {
        let text = self
            .responder
            .respond(question)
            .unwrap_or_else(|| NO_STATIC_KNOWLEDGE.to_string());
        Reply::plain(text, Route::Static)
    }

    async fn answer_with_search(&self, question: &str) -> Reply {
        match self.client.search(question, self.result_count).await {
            Ok(results) => {
                tracing::debug!("Search returned {} results", results.len());
                let answer = self.synthesizer.summarize(&results, question);
                Reply::from_answer(answer)
            }
            Err(err) => {
                log_search_failure(&err);
                let kind = err.kind();
                Reply::plain(fallback::message_for(kind), Route::Fallback(kind))
            }
        }
    }
}

fn log_search_failure(err: &SearchError) {
    match err.kind() {
        SearchErrorKind::MalformedResponse => {
            tracing::error!("Search provider returned malformed data: {}", err)
        }
        SearchErrorKind::Authentication => {
            tracing::error!("Search provider rejected credentials: {}", err)
        }
        SearchErrorKind::QuotaExceeded => tracing::warn!("Search quota exhausted: {}", err),
        SearchErrorKind::Unavailable => tracing::warn!("Search unavailable: {}", err),
        SearchErrorKind::InvalidRequest => tracing::warn!("Search request rejected: {}", err),
    }
}

fn preview(question: &str) -> String {
    const PREVIEW_CHARS: usize = 100;
    if question.chars().count() > PREVIEW_CHARS {
        let head: String = question.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        question.to_string()
    }
}
