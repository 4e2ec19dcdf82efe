//! Backend registry.

pub mod ollama;
pub mod openai;

pub use ollama::OllamaBackend;
pub use openai::OpenAiBackend;

use smarttemp_core::config::BackendConfig;
use smarttemp_core::traits::IGenerationBackend;
use tracing::{info, warn};

use crate::retry::{RetryPolicy, RetryingBackend};

/// Create the configured backend, wrapped in the retry decorator when
/// `max_retries > 0`. Unknown kinds fall back to Ollama.
pub fn create_backend(config: &BackendConfig) -> Box<dyn IGenerationBackend> {
    let backend: Box<dyn IGenerationBackend> = match config.kind.as_str() {
        "openai" => Box::new(OpenAiBackend::from_config(config)),
        "ollama" => Box::new(OllamaBackend::from_config(config)),
        other => {
            warn!(kind = other, "unknown backend kind, using ollama");
            Box::new(OllamaBackend::from_config(config))
        }
    };
    info!(
        backend = backend.name(),
        url = %config.trimmed_base_url(),
        model = %config.model,
        max_retries = config.max_retries,
        "generation backend configured"
    );

    if config.max_retries > 0 {
        Box::new(RetryingBackend::new(backend, RetryPolicy::from_config(config)))
    } else {
        backend
    }
}
