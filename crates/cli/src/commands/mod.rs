//! Command handlers for the Scout CLI.

pub mod ask;
pub mod chat;
pub mod check;
pub mod config;

pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use check::CheckCommand;
pub use config::ConfigCommand;
