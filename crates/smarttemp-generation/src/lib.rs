//! # smarttemp-generation
//!
//! Sends (prompt, temperature) to a generation backend and always returns
//! text.
//!
//! ```text
//! GenerationClient (never fails)
//! ├── IGenerationBackend
//! │   ├── OllamaBackend   (/api/generate, /api/tags, /api/show)
//! │   ├── OpenAiBackend   (/v1/chat/completions, /v1/models)
//! │   └── RetryingBackend (optional bounded retry/backoff decorator)
//! └── FallbackGenerator   (deterministic, keyed by temperature band)
//! ```

pub mod backends;
pub mod client;
pub mod fallback;
pub mod retry;
pub mod transport;

pub use backends::{create_backend, OllamaBackend, OpenAiBackend};
pub use client::GenerationClient;
pub use fallback::{FallbackGenerator, TemperatureBand};
pub use retry::{RetryPolicy, RetryingBackend};
pub use transport::HttpTransport;
