//! # smarttemp-core
//!
//! Foundation crate for the SmartTemp engine.
//! Defines the category taxonomy, analysis and generation models, the
//! pluggable traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod category;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use category::Category;
pub use config::SmartTempConfig;
pub use errors::{SmartTempError, SmartTempResult};
pub use models::{AnalysisResult, CategoryProfile, GenerationOutcome, GenerationRequest};
