use crate::prelude::*;
use std::time::Duration;

/// Versioned root of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for completions.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Seconds an outbound completion call may take.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Completion service options, read from flags or the environment.
#[derive(Debug, Clone, clap::Args)]
pub struct GeminiOptions {
    /// Gemini API key
    #[clap(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Versioned API root of the completion service
    #[clap(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Model name used for completions
    #[clap(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Timeout in seconds for each completion call
    #[clap(long, env = "GEMINI_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl GeminiOptions {
    /// Validate the options once at startup.
    pub fn into_config(self) -> Result<GeminiConfig> {
        let api_key = self.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(eyre!("GEMINI_API_KEY environment variable is empty"));
        }
        if self.timeout == 0 {
            return Err(eyre!("GEMINI_TIMEOUT must be at least one second"));
        }

        Ok(GeminiConfig {
            base_url: self.base_url,
            model: self.model,
            timeout: Duration::from_secs(self.timeout),
            ..GeminiConfig::new(api_key)
        })
    }
}

/// Completion service configuration handed to the client at construction.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Configuration pointing at the public API with default model and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
