use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Generation backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend kind: "ollama" or "openai".
    pub kind: String,
    /// Base URL without a trailing path.
    pub base_url: String,
    /// Model name.
    pub model: String,
    /// Bearer token for OpenAI-compatible servers.
    pub api_key: Option<String>,
    /// Client-wide connect/default timeout.
    pub connect_timeout_secs: u64,
    /// Per-call timeout for `/api/generate`.
    pub generate_timeout_secs: u64,
    /// Per-call timeout for `/v1/chat/completions`.
    pub chat_timeout_secs: u64,
    /// Per-call timeout for listing and model info.
    pub metadata_timeout_secs: u64,
    /// Per-call timeout for the health probe.
    pub health_timeout_secs: u64,
    /// Default token limit for generation.
    pub max_tokens: u32,
    /// Retries for transient failures. 0 disables the retry decorator.
    pub max_retries: u32,
    /// First backoff delay; doubles each retry.
    pub initial_backoff_ms: u64,
    /// Backoff cap.
    pub max_backoff_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: defaults::DEFAULT_BACKEND_KIND.to_string(),
            base_url: defaults::DEFAULT_BACKEND_URL.to_string(),
            model: defaults::DEFAULT_MODEL.to_string(),
            api_key: None,
            connect_timeout_secs: defaults::DEFAULT_CONNECT_TIMEOUT_SECS,
            generate_timeout_secs: defaults::DEFAULT_GENERATE_TIMEOUT_SECS,
            chat_timeout_secs: defaults::DEFAULT_CHAT_TIMEOUT_SECS,
            metadata_timeout_secs: defaults::DEFAULT_METADATA_TIMEOUT_SECS,
            health_timeout_secs: defaults::DEFAULT_HEALTH_TIMEOUT_SECS,
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_MAX_BACKOFF_MS,
        }
    }
}

impl BackendConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn generate_timeout(&self) -> Duration {
        Duration::from_secs(self.generate_timeout_secs)
    }

    pub fn chat_timeout(&self) -> Duration {
        Duration::from_secs(self.chat_timeout_secs)
    }

    pub fn metadata_timeout(&self) -> Duration {
        Duration::from_secs(self.metadata_timeout_secs)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }

    /// Base URL with any trailing slash removed.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
