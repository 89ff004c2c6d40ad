//! Search-routing and answer synthesis for Scout.
//!
//! The [`Assistant`] is the single entry point. For each question it asks
//! the [`Router`] whether live information is needed; if so it searches via
//! a [`SearchClient`](scout_search::SearchClient) and lets the
//! [`Synthesizer`] turn the hits into a cited [`Answer`], otherwise it
//! consults a [`StaticResponder`]. Search failures become polite text from
//! the [`fallback`] table and never reach the caller as errors.

pub mod answer;
pub mod assistant;
pub mod fallback;
pub mod responder;
pub mod router;
pub mod synthesizer;

// Re-export main types
pub use answer::Answer;
pub use assistant::{Assistant, Reply, Route};
pub use responder::{CannedResponder, StaticResponder};
pub use router::Router;
pub use synthesizer::Synthesizer;
