//! Static-knowledge answers for questions that do not need a search.

/// Answers questions without touching the network.
///
/// Returning `None` means "I don't know"; the assistant then falls back to
/// a generic reply.
pub trait StaticResponder: Send + Sync {
    fn respond(&self, question: &str) -> Option<String>;
}

/// A canned reply, chosen when every group of cues has at least one match.
#[derive(Debug, Clone)]
struct CannedEntry {
    cues: &'static [&'static [&'static str]],
    reply: &'static str,
}

const CANNED: &[CannedEntry] = &[
    CannedEntry {
        cues: &[&["aws", "amazon web services"], &["certification", "cert"]],
        reply: "AWS offers certification paths including Cloud Practitioner, Solutions Architect, \
                Developer, and SysOps Administrator at the Associate level, plus Professional and \
                Specialty certifications. Ask about the latest pricing or discounts and I'll search \
                for current details.",
    },
    CannedEntry {
        cues: &[&["azure"], &["certification", "cert"]],
        reply: "Microsoft Azure certifications come in Fundamentals, Associate, and Expert levels \
                covering roles such as Administrator, Developer, and Solutions Architect. Ask about \
                current exam pricing and I'll search for the latest details.",
    },
    CannedEntry {
        cues: &[&["google cloud", "gcp"], &["certification", "cert"]],
        reply: "Google Cloud offers certifications for Cloud Engineer, Cloud Architect, Data \
                Engineer, and other specialized roles. Ask about current exam pricing and I'll \
                search for the latest details.",
    },
    CannedEntry {
        cues: &[&["help", "what can you do"]],
        reply: "I answer technology questions. When you need current information, such as the \
                latest prices, deals, or certification news, I search the web and cite my sources.",
    },
    CannedEntry {
        cues: &[&["hello", "hi", "hey"]],
        reply: "Hello! I can help with questions about technology and certifications, and I search \
                the web when you need current information. What would you like to know?",
    },
];

/// Default responder backed by a small table of canned replies.
///
/// Cues match whole words or phrases (a trailing plural "s" is allowed),
/// so "hi" does not fire on "this".
#[derive(Debug, Clone, Default)]
pub struct CannedResponder;

impl CannedResponder {
    pub fn new() -> Self {
        Self
    }
}

impl StaticResponder for CannedResponder {
    fn respond(&self, question: &str) -> Option<String> {
        let words = normalize(question);
        CANNED
            .iter()
            .find(|entry| {
                entry
                    .cues
                    .iter()
                    .all(|group| group.iter().any(|cue| contains_phrase(&words, cue)))
            })
            .map(|entry| entry.reply.to_string())
    }
}

/// Lower-case, keep alphanumerics, and pad with spaces for boundary matching.
fn normalize(text: &str) -> String {
    let words: Vec<String> = text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    format!(" {} ", words.join(" "))
}

fn contains_phrase(padded: &str, cue: &str) -> bool {
    padded.contains(&format!(" {} ", cue)) || padded.contains(&format!(" {}s ", cue))
}
