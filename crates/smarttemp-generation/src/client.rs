//! GenerationClient: a backend facade that never fails.

use std::time::Instant;

use smarttemp_core::config::SmartTempConfig;
use smarttemp_core::constants::FALLBACK_MODELS;
use smarttemp_core::errors::GenerationError;
use smarttemp_core::models::GenerationSource;
use smarttemp_core::traits::IGenerationBackend;
use smarttemp_core::{GenerationOutcome, GenerationRequest};
use tracing::{error, info, warn};

use crate::backends::create_backend;
use crate::fallback::FallbackGenerator;

/// Sends prompts to a backend and never fails.
///
/// Any backend failure is logged and answered by the `FallbackGenerator`.
/// Auxiliary calls degrade to a default model list, `false`, or an
/// error-tagged JSON object.
pub struct GenerationClient {
    backend: Box<dyn IGenerationBackend>,
    fallback: FallbackGenerator,
    default_max_tokens: u32,
}

impl GenerationClient {
    pub fn new(
        backend: Box<dyn IGenerationBackend>,
        fallback: FallbackGenerator,
        default_max_tokens: u32,
    ) -> Self {
        Self {
            backend,
            fallback,
            default_max_tokens,
        }
    }

    pub fn from_config(config: &SmartTempConfig) -> Self {
        Self::new(
            create_backend(&config.backend),
            FallbackGenerator::new(config.fallback.simulate_latency),
            config.backend.max_tokens,
        )
    }

    pub fn default_max_tokens(&self) -> u32 {
        self.default_max_tokens
    }

    /// Generate text for `prompt` at `temperature`. The temperature is used
    /// as given. `None` for `max_tokens` uses the configured default.
    pub fn generate(
        &self,
        prompt: &str,
        temperature: f64,
        max_tokens: Option<u32>,
    ) -> GenerationOutcome {
        let request = GenerationRequest::new(
            prompt,
            temperature,
            max_tokens.unwrap_or(self.default_max_tokens),
        );
        self.generate_request(&request)
    }

    /// Like `generate`, returning only the text.
    pub fn generate_text(&self, prompt: &str, temperature: f64, max_tokens: Option<u32>) -> String {
        self.generate(prompt, temperature, max_tokens).text
    }

    pub fn generate_request(&self, request: &GenerationRequest) -> GenerationOutcome {
        let started = Instant::now();
        let result = self.backend.generate(request);
        let elapsed = started.elapsed();

        match result {
            Ok(text) => {
                info!(
                    backend = self.backend.name(),
                    model = self.backend.model(),
                    temperature = request.temperature,
                    elapsed_secs = elapsed.as_secs_f64(),
                    "response generated"
                );
                GenerationOutcome {
                    text,
                    temperature: request.temperature,
                    source: GenerationSource::Backend {
                        name: self.backend.name().to_string(),
                    },
                    elapsed_ms: elapsed.as_millis() as u64,
                }
            }
            Err(e) => {
                self.log_failure("generate", &e);
                let fallback_started = Instant::now();
                let text = self.fallback.generate(&request.prompt, request.temperature);
                GenerationOutcome {
                    text,
                    temperature: request.temperature,
                    source: GenerationSource::Fallback {
                        reason: e.to_string(),
                    },
                    elapsed_ms: (elapsed + fallback_started.elapsed()).as_millis() as u64,
                }
            }
        }
    }

    /// Models served by the backend, or the default list when the backend
    /// fails or reports none.
    pub fn list_models(&self) -> Vec<String> {
        match self.backend.list_models() {
            Ok(models) if !models.is_empty() => {
                info!(count = models.len(), "found available models");
                models
            }
            Ok(_) => {
                warn!("backend reported no models, using default list");
                default_models()
            }
            Err(e) => {
                self.log_failure("list_models", &e);
                default_models()
            }
        }
    }

    /// `true` only when the backend's listing endpoint answers 200.
    pub fn health_check(&self) -> bool {
        match self.backend.ping() {
            Ok(()) => true,
            Err(e) => {
                warn!(backend = self.backend.name(), error = %e, "health check failed");
                false
            }
        }
    }

    /// Model metadata, or `{"error": "..."}` on failure.
    pub fn model_info(&self) -> serde_json::Value {
        match self.backend.model_info() {
            Ok(info) => info,
            Err(e) => {
                self.log_failure("model_info", &e);
                serde_json::json!({ "error": e.to_string() })
            }
        }
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        let model = model.into();
        info!(model = %model, "model switched");
        self.backend.set_model(model);
    }

    pub fn model(&self) -> &str {
        self.backend.model()
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    fn log_failure(&self, operation: &str, e: &GenerationError) {
        if e.is_connection() {
            warn!(backend = self.backend.name(), operation, error = %e, "backend unreachable, using fallback");
        } else {
            error!(backend = self.backend.name(), operation, error = %e, "backend request failed, using fallback");
        }
    }
}

fn default_models() -> Vec<String> {
    FALLBACK_MODELS.iter().map(|m| m.to_string()).collect()
}
