use serde::{Deserialize, Serialize};

use super::defaults;

/// Prompt encoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Encoder provider: "hashing" or "ollama".
    pub provider: String,
    /// Vector dimensions.
    pub dimensions: usize,
    /// Ollama server for the "ollama" provider.
    pub ollama_url: String,
    /// Embedding model served by Ollama.
    pub ollama_model: String,
    /// Per-request timeout for remote encoders.
    pub timeout_secs: u64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_ENCODER_PROVIDER.to_string(),
            dimensions: defaults::DEFAULT_ENCODER_DIMENSIONS,
            ollama_url: defaults::DEFAULT_OLLAMA_URL.to_string(),
            ollama_model: defaults::DEFAULT_OLLAMA_EMBED_MODEL.to_string(),
            timeout_secs: defaults::DEFAULT_ENCODER_TIMEOUT_SECS,
        }
    }
}
