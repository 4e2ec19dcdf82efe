//! Seams between the engine's components. Each has at least two
//! implementations in the workspace, chosen at construction time.

pub mod classifier;
pub mod encoder;
pub mod generation;
pub mod temperature;

pub use classifier::IPromptClassifier;
pub use encoder::IPromptEncoder;
pub use generation::IGenerationBackend;
pub use temperature::ITemperatureStrategy;
