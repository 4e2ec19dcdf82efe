//! # smarttemp-encoder
//!
//! Prompt encoders behind `IPromptEncoder`.
//!
//! ```text
//! create_encoder(&EncoderConfig)
//! ├── OllamaEncoder  (local server, /api/embed, health-checked at startup)
//! └── HashingEncoder (offline, deterministic, always available)
//! ```
//!
//! The encoder is chosen once. Profiles and prompts must share one vector
//! space, so there is no per-call fallback between encoders.

pub mod providers;

pub use providers::{create_encoder, HashingEncoder, OllamaEncoder};
