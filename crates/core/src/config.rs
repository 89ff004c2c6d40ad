//! Configuration management for Scout.
//!
//! Configuration is assembled once at startup from, in increasing priority:
//! - Built-in defaults
//! - A YAML config file (`.scout/config.yaml` or an explicit path)
//! - Environment variables
//! - Command-line flags
//!
//! The result is read-only for the rest of the process and is passed by
//! reference into whatever needs it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Google Custom Search JSON API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Number of results requested per search unless configured otherwise.
pub const DEFAULT_RESULT_COUNT: u32 = 5;

/// Upper bound the provider accepts for a single request.
pub const MAX_RESULT_COUNT: u32 = 10;

/// Outbound search timeout unless configured otherwise.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the API key unless the config file names another.
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Environment variable holding the search engine id.
pub const SEARCH_ENGINE_ID_ENV: &str = "GOOGLE_SEARCH_ENGINE_ID";

const MIN_API_KEY_LEN: usize = 20;
const MIN_ENGINE_ID_LEN: usize = 10;
const KNOWN_PROVIDERS: [&str; 1] = ["google"];

/// Search provider settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Provider name (currently only "google")
    pub provider: String,

    /// Name of the environment variable the API key is read from
    pub api_key_env: String,

    /// API key; never serialized
    #[serde(skip)]
    pub api_key: Option<String>,

    /// Custom Search Engine id (`cx`)
    pub search_engine_id: Option<String>,

    /// Results requested per search
    pub result_count: u32,

    /// Outbound request timeout in seconds
    pub timeout_secs: u64,

    /// Provider endpoint URL
    pub endpoint: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: "google".to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            search_engine_id: None,
            result_count: DEFAULT_RESULT_COUNT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl SearchConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key with everything but its edges hidden.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(|key| mask(key, 8, 4))
    }

    /// Search engine id with everything but its edges hidden.
    pub fn masked_engine_id(&self) -> Option<String> {
        self.search_engine_id.as_deref().map(|id| mask(id, 6, 4))
    }
}

impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("provider", &self.provider)
            .field("api_key_env", &self.api_key_env)
            .field("api_key", &self.masked_api_key())
            .field("search_engine_id", &self.masked_engine_id())
            .field("result_count", &self.result_count)
            .field("timeout_secs", &self.timeout_secs)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn mask(value: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= head + tail {
        return "***".to_string();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{}...{}", start, end)
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Config file that was merged, if any
    pub config_file: Option<PathBuf>,

    /// Search provider settings
    pub search: SearchConfig,

    /// Replacement trigger terms for the router; `None` keeps the built-in set
    pub trigger_terms: Option<Vec<String>>,

    /// Run a provider health check when the assistant is built
    pub validate_credentials: bool,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    search: Option<SearchSection>,
    router: Option<RouterSection>,
    logging: Option<LoggingSection>,
    validate_credentials: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSection {
    provider: Option<String>,
    api_key_env: Option<String>,
    search_engine_id: Option<String>,
    result_count: Option<u32>,
    timeout_secs: Option<u64>,
    endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouterSection {
    trigger_terms: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            search: SearchConfig::default(),
            trigger_terms: None,
            validate_credentials: false,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and the process environment.
    ///
    /// Environment variables:
    /// - `GOOGLE_API_KEY` (or the variable named by `search.apiKeyEnv`)
    /// - `GOOGLE_SEARCH_ENGINE_ID`
    /// - `SCOUT_CONFIG`: Path to config file
    /// - `SCOUT_RESULT_COUNT`: Results per search
    /// - `SCOUT_TIMEOUT_SECS`: Search timeout
    /// - `SCOUT_SEARCH_ENDPOINT`: Provider endpoint
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// Loading does not validate credentials; call [`AppConfig::validate`]
    /// before building anything that talks to the provider.
    ///
    /// # Example
    /// ```no_run
    /// use scout_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None).expect("Failed to load config");
    /// println!("Results per search: {}", config.search.result_count);
    /// ```
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        Self::load_with(config_file, |name| std::env::var(name).ok())
    }

    /// Load configuration with a custom environment lookup.
    pub fn load_with<F>(config_file: Option<&Path>, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let explicit = config_file
            .map(Path::to_path_buf)
            .or_else(|| env("SCOUT_CONFIG").map(PathBuf::from));

        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                Some(path)
            }
            None => {
                let default = PathBuf::from(".scout").join("config.yaml");
                default.exists().then_some(default)
            }
        };

        if let Some(path) = config_path {
            config.merge_yaml(&path)?;
        }

        // Environment variables override YAML config
        config.search.api_key = env(&config.search.api_key_env).filter(|v| !v.trim().is_empty());

        if let Some(id) = env(SEARCH_ENGINE_ID_ENV).filter(|v| !v.trim().is_empty()) {
            config.search.search_engine_id = Some(id);
        }

        if let Some(count) = env("SCOUT_RESULT_COUNT") {
            config.search.result_count = count.trim().parse().map_err(|_| {
                AppError::Config(format!("SCOUT_RESULT_COUNT is not a number: {}", count))
            })?;
        }

        if let Some(secs) = env("SCOUT_TIMEOUT_SECS") {
            config.search.timeout_secs = secs.trim().parse().map_err(|_| {
                AppError::Config(format!("SCOUT_TIMEOUT_SECS is not a number: {}", secs))
            })?;
        }

        if let Some(endpoint) = env("SCOUT_SEARCH_ENDPOINT") {
            config.search.endpoint = endpoint;
        }

        if let Some(level) = env("RUST_LOG") {
            config.log_level = Some(level);
        }

        if env("NO_COLOR").is_some() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &Path) -> AppResult<()> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        if let Some(search) = file.search {
            if let Some(provider) = search.provider {
                self.search.provider = provider;
            }
            if let Some(api_key_env) = search.api_key_env {
                self.search.api_key_env = api_key_env;
            }
            if let Some(id) = search.search_engine_id {
                self.search.search_engine_id = Some(id);
            }
            if let Some(count) = search.result_count {
                self.search.result_count = count;
            }
            if let Some(secs) = search.timeout_secs {
                self.search.timeout_secs = secs;
            }
            if let Some(endpoint) = search.endpoint {
                self.search.endpoint = endpoint;
            }
        }

        if let Some(router) = file.router {
            self.trigger_terms = router.trigger_terms;
        }

        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        if let Some(validate) = file.validate_credentials {
            self.validate_credentials = validate;
        }

        self.config_file = Some(path.to_path_buf());
        tracing::debug!("Merged config file {:?}", path);
        Ok(())
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over the file and the environment.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
        result_count: Option<u32>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        if let Some(count) = result_count {
            self.search.result_count = count;
        }

        if let Some(secs) = timeout_secs {
            self.search.timeout_secs = secs;
        }

        self
    }

    /// Names of required settings that are not set.
    pub fn missing_settings(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.search.api_key.is_none() {
            missing.push(self.search.api_key_env.clone());
        }
        if self.search.search_engine_id.is_none() {
            missing.push(SEARCH_ENGINE_ID_ENV.to_string());
        }
        missing
    }

    /// Whether all required settings are present.
    pub fn is_configured(&self) -> bool {
        self.missing_settings().is_empty()
    }

    /// Validate configuration before the assistant is built.
    pub fn validate(&self) -> AppResult<()> {
        let search = &self.search;

        let provider = search.provider.to_lowercase();
        if !KNOWN_PROVIDERS.contains(&provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown search provider: {}. Supported: {}",
                search.provider,
                KNOWN_PROVIDERS.join(", ")
            )));
        }

        let missing = self.missing_settings();
        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "Missing required settings: {}",
                missing.join(", ")
            )));
        }

        if let Some(key) = &search.api_key {
            if key.trim().len() < MIN_API_KEY_LEN {
                return Err(AppError::Config(format!(
                    "API key in {} looks too short (expected at least {} characters)",
                    search.api_key_env, MIN_API_KEY_LEN
                )));
            }
        }

        if let Some(id) = &search.search_engine_id {
            if id.trim().len() < MIN_ENGINE_ID_LEN {
                return Err(AppError::Config(format!(
                    "Search engine id looks too short (expected at least {} characters)",
                    MIN_ENGINE_ID_LEN
                )));
            }
        }

        if search.result_count == 0 || search.result_count > MAX_RESULT_COUNT {
            return Err(AppError::Config(format!(
                "Result count must be between 1 and {}, got {}",
                MAX_RESULT_COUNT, search.result_count
            )));
        }

        if search.timeout_secs == 0 {
            return Err(AppError::Config(
                "Search timeout must be at least one second".to_string(),
            ));
        }

        if search.endpoint.trim().is_empty() {
            return Err(AppError::Config("Search endpoint is empty".to_string()));
        }

        Ok(())
    }
}
