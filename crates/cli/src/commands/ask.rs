//! Ask command handler.
//!
//! Answers a single question and exits.

use clap::Args;
use scout_assistant::{Assistant, Reply};
use scout_core::{config::AppConfig, AppResult};

/// Ask a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask (words are joined with spaces)
    pub question: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let assistant = Assistant::connect(config).await?;
        let question = self.question.join(" ");
        let reply = assistant.respond(&question).await;

        if self.json {
            let output = reply_json(&question, &reply, assistant.provider_name());
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", reply.text);
        }

        Ok(())
    }
}

/// Structured form of a reply for `--json` output.
pub fn reply_json(question: &str, reply: &Reply, provider: &str) -> serde_json::Value {
    serde_json::json!({
        "question": question,
        "answer": reply.text,
        "route": reply.route.label(),
        "sources": reply.sources,
        "provider": provider,
        "timestamp": chrono::Local::now().to_rfc3339(),
    })
}
