//! OpenAI-compatible chat completion backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smarttemp_core::config::BackendConfig;
use smarttemp_core::errors::GenerationError;
use smarttemp_core::traits::IGenerationBackend;
use smarttemp_core::GenerationRequest;

use crate::transport::HttpTransport;

const TOP_P: f64 = 0.9;

pub struct OpenAiBackend {
    transport: HttpTransport,
    model: String,
    chat_timeout: Duration,
    metadata_timeout: Duration,
    health_timeout: Duration,
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    data: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    id: String,
}

impl OpenAiBackend {
    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            transport: HttpTransport::new(config.trimmed_base_url(), config.connect_timeout())
                .with_bearer_token(config.api_key.clone()),
            model: config.model.clone(),
            chat_timeout: config.chat_timeout(),
            metadata_timeout: config.metadata_timeout(),
            health_timeout: config.health_timeout(),
        }
    }
}

impl IGenerationBackend for OpenAiBackend {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let payload = ChatPayload {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            top_p: TOP_P,
        };
        let resp: ChatResponse =
            self.transport
                .post_json("/v1/chat/completions", &payload, self.chat_timeout)?;

        resp.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or_else(|| GenerationError::MalformedResponse {
                reason: "missing choices[0].message.content".to_string(),
            })
    }

    fn list_models(&self) -> Result<Vec<String>, GenerationError> {
        let list: ModelList = self.transport.get_json("/v1/models", self.metadata_timeout)?;
        Ok(list.data.into_iter().map(|m| m.id).collect())
    }

    fn ping(&self) -> Result<(), GenerationError> {
        self.transport.probe("/v1/models", self.health_timeout)
    }

    fn model_info(&self) -> Result<serde_json::Value, GenerationError> {
        self.transport
            .get_json(&format!("/v1/models/{}", self.model), self.metadata_timeout)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn set_model(&mut self, model: String) {
        self.model = model;
    }

    fn name(&self) -> &str {
        "openai"
    }
}
