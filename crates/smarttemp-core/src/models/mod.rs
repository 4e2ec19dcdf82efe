//! Data objects shared between the classifier, the temperature controller,
//! the generation client, and callers.

pub mod analysis_result;
pub mod category_profile;
pub mod generation;
pub mod history;

pub use analysis_result::{AnalysisResult, Classification};
pub use category_profile::CategoryProfile;
pub use generation::{GenerationOutcome, GenerationRequest, GenerationSource};
pub use history::{HistoryEntry, HistoryLog};
