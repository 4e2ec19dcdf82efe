//! # smarttemp-classifier
//!
//! Prompt → category → temperature.
//!
//! ```text
//! SmartTempEngine
//! ├── IPromptClassifier (chosen at construction)
//! │   ├── EmbeddingClassifier (cosine vs. ProfileStore embeddings)
//! │   └── KeywordClassifier   (substring hit counts)
//! ├── ITemperatureStrategy
//! │   ├── TieredTemperature   (three confidence tiers)
//! │   └── LinearTemperature   (base + (1 - confidence) * scale)
//! └── ProfileStore            (category embeddings, built once)
//! ```

pub mod classifiers;
pub mod engine;
pub mod profile_store;
pub mod similarity;
pub mod temperature;

pub use classifiers::{EmbeddingClassifier, KeywordClassifier};
pub use engine::SmartTempEngine;
pub use profile_store::ProfileStore;
pub use temperature::{create_strategy, LinearTemperature, TieredTemperature};
