//! Ollama backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smarttemp_core::config::BackendConfig;
use smarttemp_core::constants::NO_RESPONSE_PLACEHOLDER;
use smarttemp_core::errors::GenerationError;
use smarttemp_core::traits::IGenerationBackend;
use smarttemp_core::GenerationRequest;

use crate::transport::HttpTransport;

/// Sampling options sent with every generate call besides temperature and
/// token limit.
const TOP_P: f64 = 0.9;
const TOP_K: u32 = 40;
const REPEAT_PENALTY: f64 = 1.1;

pub struct OllamaBackend {
    transport: HttpTransport,
    model: String,
    generate_timeout: Duration,
    metadata_timeout: Duration,
    health_timeout: Duration,
}

#[derive(Serialize)]
struct GeneratePayload<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f64,
    num_predict: u32,
    top_p: f64,
    top_k: u32,
    repeat_penalty: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    name: String,
}

#[derive(Serialize)]
struct ShowPayload<'a> {
    name: &'a str,
}

impl OllamaBackend {
    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            transport: HttpTransport::new(config.trimmed_base_url(), config.connect_timeout()),
            model: config.model.clone(),
            generate_timeout: config.generate_timeout(),
            metadata_timeout: config.metadata_timeout(),
            health_timeout: config.health_timeout(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

impl IGenerationBackend for OllamaBackend {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let payload = GeneratePayload {
            model: &self.model,
            prompt: &request.prompt,
            stream: false,
            options: GenerateOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
                top_p: TOP_P,
                top_k: TOP_K,
                repeat_penalty: REPEAT_PENALTY,
            },
        };
        let resp: GenerateResponse =
            self.transport
                .post_json("/api/generate", &payload, self.generate_timeout)?;
        Ok(resp
            .response
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string()))
    }

    fn list_models(&self) -> Result<Vec<String>, GenerationError> {
        let tags: TagsResponse = self.transport.get_json("/api/tags", self.metadata_timeout)?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    fn ping(&self) -> Result<(), GenerationError> {
        self.transport.probe("/api/tags", self.health_timeout)
    }

    fn model_info(&self) -> Result<serde_json::Value, GenerationError> {
        self.transport.post_json(
            "/api/show",
            &ShowPayload { name: &self.model },
            self.metadata_timeout,
        )
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn set_model(&mut self, model: String) {
        self.model = model;
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
