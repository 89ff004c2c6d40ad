//! Config command handler.
//!
//! Shows which settings are in effect without revealing secrets.

use clap::Args;
use scout_core::{config::AppConfig, AppResult};

/// Show configuration status
#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ConfigCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing config command");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&status_json(config))?);
        } else {
            print!("{}", status_text(config));
        }

        Ok(())
    }
}

fn status_json(config: &AppConfig) -> serde_json::Value {
    let search = &config.search;
    let validation = config.validate().err().map(|e| e.to_string());

    serde_json::json!({
        "configFile": config.config_file,
        "provider": search.provider,
        "apiKey": search.masked_api_key(),
        "apiKeyEnv": search.api_key_env,
        "searchEngineId": search.masked_engine_id(),
        "resultCount": search.result_count,
        "timeoutSecs": search.timeout_secs,
        "endpoint": search.endpoint,
        "missing": config.missing_settings(),
        "ready": validation.is_none(),
        "problem": validation,
    })
}

/// Human-readable configuration report.
pub fn status_text(config: &AppConfig) -> String {
    let search = &config.search;
    let mut out = String::new();

    out.push_str("Configuration Status\n");
    out.push_str("--------------------\n");

    match &config.config_file {
        Some(path) => out.push_str(&format!("Config file:      {}\n", path.display())),
        None => out.push_str("Config file:      (none)\n"),
    }

    out.push_str(&format!("Provider:         {}\n", search.provider));
    out.push_str(&format!(
        "API key:          {}\n",
        search
            .masked_api_key()
            .unwrap_or_else(|| format!("not set ({})", search.api_key_env))
    ));
    out.push_str(&format!(
        "Search engine id: {}\n",
        search
            .masked_engine_id()
            .unwrap_or_else(|| "not set".to_string())
    ));
    out.push_str(&format!("Results/search:   {}\n", search.result_count));
    out.push_str(&format!("Timeout:          {}s\n", search.timeout_secs));

    match config.validate() {
        Ok(()) => out.push_str("Status:           ready\n"),
        Err(e) => {
            out.push_str(&format!("Status:           incomplete ({})\n", e));
            let missing = config.missing_settings();
            if !missing.is_empty() {
                out.push_str("\nSet these in your environment or a .env file:\n");
                for name in missing {
                    out.push_str(&format!("  - {}\n", name));
                }
            }
        }
    }

    out
}
