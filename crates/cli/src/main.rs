//! Scout CLI
//!
//! Main entry point for the scout command-line tool.
//! Answers questions, searching the web when they need current information.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChatCommand, CheckCommand, ConfigCommand};
use scout_core::{
    config::AppConfig,
    logging::{self, LogFormat},
    AppResult,
};
use std::path::PathBuf;

/// Scout - answers questions, with live web search when they need current information
#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(about = "Answers questions, searching the web when they need current information", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (default: .scout/config.yaml if present)
    #[arg(short, long, global = true, env = "SCOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Results to request per search (1-10)
    #[arg(short = 'n', long, global = true)]
    results: Option<u32>,

    /// Search timeout in seconds
    #[arg(short, long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question
    Ask(AskCommand),

    /// Interactive question-and-answer session
    Chat(ChatCommand),

    /// Show configuration status
    Config(ConfigCommand),

    /// Verify search credentials with the provider
    Check(CheckCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load .env file if present, before clap reads env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(
        cli.log_level,
        cli.verbose,
        cli.no_color,
        cli.results,
        cli.timeout,
    );

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    logging::init_logging(config.log_level.as_deref(), config.no_color, format)?;

    tracing::info!("Scout starting");
    tracing::debug!("Config file: {:?}", config.config_file);
    tracing::debug!("Search: {:?}", config.search);

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Chat(_) => "chat",
        Commands::Config(_) => "config",
        Commands::Check(_) => "check",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
        Commands::Config(cmd) => cmd.execute(&config),
        Commands::Check(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
