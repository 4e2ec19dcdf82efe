use crate::errors::GenerationError;
use crate::models::GenerationRequest;

/// A text-generation backend reachable over the network.
///
/// Backends report every failure as a typed `GenerationError`; turning
/// those into fallback text is the generation client's job.
pub trait IGenerationBackend: Send + Sync {
    /// Generate text for the request.
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    /// Names of the models the backend serves.
    fn list_models(&self) -> Result<Vec<String>, GenerationError>;

    /// Succeeds when the backend answers its listing endpoint with 200.
    fn ping(&self) -> Result<(), GenerationError>;

    /// Metadata for the configured model.
    fn model_info(&self) -> Result<serde_json::Value, GenerationError>;

    /// Currently configured model.
    fn model(&self) -> &str;

    /// Switch the model used for subsequent calls.
    fn set_model(&mut self, model: String);

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

impl<T: IGenerationBackend + ?Sized> IGenerationBackend for Box<T> {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        (**self).generate(request)
    }

    fn list_models(&self) -> Result<Vec<String>, GenerationError> {
        (**self).list_models()
    }

    fn ping(&self) -> Result<(), GenerationError> {
        (**self).ping()
    }

    fn model_info(&self) -> Result<serde_json::Value, GenerationError> {
        (**self).model_info()
    }

    fn model(&self) -> &str {
        (**self).model()
    }

    fn set_model(&mut self, model: String) {
        (**self).set_model(model)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
