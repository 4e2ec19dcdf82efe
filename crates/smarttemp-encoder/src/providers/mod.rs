//! Encoder registry.

pub mod hashing_encoder;
pub mod ollama_encoder;

pub use hashing_encoder::HashingEncoder;
pub use ollama_encoder::OllamaEncoder;

use smarttemp_core::config::EncoderConfig;
use smarttemp_core::traits::IPromptEncoder;
use tracing::{info, warn};

/// Create the configured encoder.
///
/// `ollama` is used only if its health check passes; anything else falls
/// through to the hashing encoder.
pub fn create_encoder(config: &EncoderConfig) -> Box<dyn IPromptEncoder> {
    match config.provider.as_str() {
        "ollama" => {
            let encoder = OllamaEncoder::from_config(config);
            if encoder.health_check() {
                info!(provider = "ollama", model = %config.ollama_model, "prompt encoder connected");
                Box::new(encoder)
            } else {
                warn!(url = %config.ollama_url, "Ollama encoder unavailable, falling back to hashing");
                Box::new(HashingEncoder::new(config.dimensions))
            }
        }
        "hashing" => {
            info!(provider = "hashing", dimensions = config.dimensions, "using hashing encoder");
            Box::new(HashingEncoder::new(config.dimensions))
        }
        other => {
            warn!(provider = other, "unknown encoder provider, using hashing");
            Box::new(HashingEncoder::new(config.dimensions))
        }
    }
}
