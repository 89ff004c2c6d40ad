//! Scout Core Library
//!
//! Foundational pieces shared by every Scout crate:
//! - Error handling (`AppError`, `AppResult`, `SearchError`)
//! - Logging infrastructure
//! - Configuration management

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, SearchConfig};
pub use error::{AppError, AppResult, SearchError, SearchErrorKind};
