//! Check command handler.
//!
//! Runs one minimal search to confirm the provider accepts our credentials.

use clap::Args;
use scout_assistant::Assistant;
use scout_core::{config::AppConfig, AppResult};

/// Verify search credentials with the provider
#[derive(Args, Debug)]
pub struct CheckCommand {}

impl CheckCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing check command");

        let assistant = Assistant::from_config(config)?;

        match assistant.check().await {
            Ok(()) => {
                println!(
                    "Search provider '{}' accepted the configured credentials.",
                    assistant.provider_name()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Search check failed ({}): {}", e.kind(), e);
                Err(e.into())
            }
        }
    }
}
