//! Chat command handler.
//!
//! Reads questions from stdin until `quit`, `exit` or end of input.
//! Each line is answered independently; nothing carries over between turns.

use clap::Args;
use scout_assistant::Assistant;
use scout_core::{config::AppConfig, AppResult};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::config::status_text;

const HELP: &str = "\
Type a question and press Enter. Questions about current events, prices or
deals are answered from a live web search, with sources.

Commands:
  help     Show this help
  config   Show configuration status
  quit     Exit (also: exit, Ctrl-D)
";

/// Interactive question-and-answer session
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Prompt shown before each question
    #[arg(long, default_value = "you> ")]
    pub prompt: String,
}

/// What the session should do with one input line.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Help,
    Config,
    Question(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim().to_lowercase().as_str() {
        "quit" | "exit" => Input::Quit,
        "help" => Input::Help,
        "config" => Input::Config,
        _ => Input::Question(line),
    }
}

impl ChatCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing chat command");

        let assistant = Assistant::connect(config).await?;

        println!("Scout is ready. Type 'help' for commands, 'quit' to exit.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("{}", self.prompt);
            std::io::stdout().flush().ok();

            let Some(line) = lines.next_line().await? else {
                println!();
                break;
            };

            match parse_input(&line) {
                Input::Quit => break,
                Input::Help => print!("{}", HELP),
                Input::Config => print!("{}", status_text(config)),
                Input::Question(question) => {
                    let answer = assistant.ask(question).await;
                    println!("\n{}\n", answer);
                }
            }
        }

        tracing::info!("Chat session ended");
        Ok(())
    }
}
