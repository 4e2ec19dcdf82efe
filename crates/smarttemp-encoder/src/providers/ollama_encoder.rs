//! Ollama embedding encoder.
//!
//! Talks to a local Ollama server over `/api/embed`. Must pass a health
//! check before it reports itself available.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use smarttemp_core::config::EncoderConfig;
use smarttemp_core::errors::{EncoderError, SmartTempResult};
use smarttemp_core::traits::IPromptEncoder;
use tracing::{debug, warn};

const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Prompt encoder backed by an Ollama embedding model.
pub struct OllamaEncoder {
    client: Client,
    base_url: String,
    model: String,
    dimensions: usize,
    available: AtomicBool,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaEncoder {
    pub fn new(base_url: &str, model: &str, dimensions: usize, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            dimensions: dimensions.max(1),
            available: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &EncoderConfig) -> Self {
        Self::new(
            &config.ollama_url,
            &config.ollama_model,
            config.dimensions,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Probe `/api/tags`. Updates availability and returns it.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        let ok = match self.client.get(&url).timeout(HEALTH_TIMEOUT).send() {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "Ollama encoder health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama encoder health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama encoder unreachable");
                false
            }
        };
        self.available.store(ok, Ordering::Relaxed);
        ok
    }

    fn request_embeddings(&self, texts: &[String]) -> SmartTempResult<Vec<Vec<f32>>> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(EncoderError::ProviderUnavailable {
                provider: self.name().to_string(),
            }
            .into());
        }

        let url = format!("{}/api/embed", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .map_err(|e| EncoderError::InferenceFailed {
                reason: format!("Ollama HTTP error: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EncoderError::InferenceFailed {
                reason: format!("Ollama returned {status}: {body}"),
            }
            .into());
        }

        let parsed: EmbedResponse = response.json().map_err(|e| EncoderError::InferenceFailed {
            reason: format!("Ollama JSON parse error: {e}"),
        })?;

        if parsed.embeddings.len() != texts.len() {
            return Err(EncoderError::InferenceFailed {
                reason: format!(
                    "expected {} embeddings, got {}",
                    texts.len(),
                    parsed.embeddings.len()
                ),
            }
            .into());
        }

        let dims = self.dimensions;
        parsed
            .embeddings
            .into_iter()
            .map(|mut v| -> SmartTempResult<Vec<f32>> {
                if v.is_empty() {
                    return Err(EncoderError::EmptyEmbedding.into());
                }
                if v.len() != dims {
                    debug!(expected = dims, actual = v.len(), "resizing Ollama embedding");
                    v.resize(dims, 0.0);
                }
                Ok(v)
            })
            .collect()
    }
}

impl IPromptEncoder for OllamaEncoder {
    fn encode(&self, text: &str) -> SmartTempResult<Vec<f32>> {
        self.request_embeddings(&[text.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| EncoderError::EmptyEmbedding.into())
    }

    fn encode_batch(&self, texts: &[String]) -> SmartTempResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
