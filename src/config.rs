// path: src/config.rs
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// What to search for and how to report it.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    pub pattern: String,
    #[serde(default)]
    pub alphabetic_only: bool,
    /// Page-count cap; `None` means the provider's hard limit. Clamped by `PagePlan`.
    #[serde(default)]
    pub max_pages: Option<i64>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub debug: bool,
}

impl RunConfig {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            alphabetic_only: false,
            max_pages: None,
            site: None,
            verbose: false,
            debug: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pattern.trim().is_empty() {
            return Err(ConfigError::MissingPattern);
        }
        Ok(())
    }
}

/// Credentials and endpoint for the Custom Search API.
#[derive(Clone, Deserialize)]
pub struct SearchCredentials {
    pub api_key: String,
    pub engine_id: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl std::fmt::Debug for SearchCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCredentials")
            .field("api_key", &"<redacted>")
            .field("engine_id", &self.engine_id)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl SearchCredentials {
    pub fn from_env() -> Self {
        let api_key = std::env::var("SNOWCLONE_API_KEY").unwrap_or_default();
        let engine_id = std::env::var("SNOWCLONE_ENGINE_ID").unwrap_or_default();
        let endpoint = std::env::var("SNOWCLONE_ENDPOINT").unwrap_or_else(|_| default_endpoint());
        Self { api_key, engine_id, endpoint }
    }

    /// CLI values win over the environment.
    pub fn with_overrides(mut self, api_key: Option<String>, engine_id: Option<String>) -> Self {
        if let Some(k) = api_key {
            self.api_key = k;
        }
        if let Some(e) = engine_id {
            self.engine_id = e;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.engine_id.trim().is_empty() {
            return Err(ConfigError::MissingEngineId);
        }
        Ok(())
    }
}
