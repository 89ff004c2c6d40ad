//! User-facing replies for failed searches.
//!
//! One row per [`SearchErrorKind`]. Malformed provider data reads the same
//! as an outage to the user; the difference only shows up in the logs.

use scout_core::SearchErrorKind;

pub const RATE_LIMITED: &str = "I'm getting a lot of requests right now and have hit my search \
limit. Please wait a moment and try again.";

pub const TRY_AGAIN_LATER: &str = "I'm having trouble reaching the search service right now. \
Please try again later, or ask me something else.";

pub const SEARCH_NOT_CONFIGURED: &str = "I can't search the web right now because my search \
access isn't set up correctly. Please let the administrator know.";

pub const REPHRASE: &str = "I couldn't search for that as asked. Could you rephrase your \
question more concisely?";

const FALLBACKS: [(SearchErrorKind, &str); 5] = [
    (SearchErrorKind::QuotaExceeded, RATE_LIMITED),
    (SearchErrorKind::Unavailable, TRY_AGAIN_LATER),
    (SearchErrorKind::MalformedResponse, TRY_AGAIN_LATER),
    (SearchErrorKind::Authentication, SEARCH_NOT_CONFIGURED),
    (SearchErrorKind::InvalidRequest, REPHRASE),
];

/// Reply shown to the user for a failed search of the given kind.
pub fn message_for(kind: SearchErrorKind) -> &'static str {
    FALLBACKS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, message)| *message)
        .unwrap_or(TRY_AGAIN_LATER)
}
