//! Bounded retry with exponential backoff around any backend.

use std::time::Duration;

use smarttemp_core::config::BackendConfig;
use smarttemp_core::errors::GenerationError;
use smarttemp_core::traits::IGenerationBackend;
use smarttemp_core::GenerationRequest;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// First backoff; doubles each retry.
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_backoff: config.initial_backoff(),
            max_backoff: config.max_backoff(),
        }
    }

    /// Run `op`, retrying transient failures only. Connection failures and
    /// client errors return immediately.
    pub fn run<T>(
        &self,
        operation: &str,
        mut op: impl FnMut() -> Result<T, GenerationError>,
    ) -> Result<T, GenerationError> {
        let mut backoff = self.initial_backoff;
        let mut attempt = 0;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    debug!(
                        operation,
                        attempt,
                        max_retries = self.max_retries,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %e,
                        "retrying after transient failure"
                    );
                    std::thread::sleep(backoff);
                    backoff = (backoff * 2).min(self.max_backoff);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Decorator adding `RetryPolicy` to generate, list, and info calls.
/// `ping` stays single-shot so health checks stay fast.
pub struct RetryingBackend<B> {
    inner: B,
    policy: RetryPolicy,
}

impl<B: IGenerationBackend> RetryingBackend<B> {
    pub fn new(inner: B, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: IGenerationBackend> IGenerationBackend for RetryingBackend<B> {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.policy.run("generate", || self.inner.generate(request))
    }

    fn list_models(&self) -> Result<Vec<String>, GenerationError> {
        self.policy.run("list_models", || self.inner.list_models())
    }

    fn ping(&self) -> Result<(), GenerationError> {
        self.inner.ping()
    }

    fn model_info(&self) -> Result<serde_json::Value, GenerationError> {
        self.policy.run("model_info", || self.inner.model_info())
    }

    fn model(&self) -> &str {
        self.inner.model()
    }

    fn set_model(&mut self, model: String) {
        self.inner.set_model(model)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
