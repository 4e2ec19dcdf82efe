//! Golden datasets and deterministic test doubles shared by the SmartTemp
//! crates' tests and benches.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use smarttemp_core::errors::{EncoderError, GenerationError, SmartTempResult};
use smarttemp_core::traits::{IGenerationBackend, IPromptEncoder};
use smarttemp_core::{Category, GenerationRequest};

/// Root directory of this crate's fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// One labelled prompt from `golden/prompts.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenPrompt {
    pub prompt: String,
    pub expected_category: Category,
    /// The expected category's optimal range.
    pub min_temperature: f64,
    pub max_temperature: f64,
}

pub fn golden_prompts() -> Vec<GoldenPrompt> {
    load_fixture("golden/prompts.json")
}

/// Words that push a text onto each category's axis. The lists are disjoint
/// and each category description hits only its own list.
const AXIS_VOCABULARY: [(Category, &[&str]); Category::COUNT] = [
    (
        Category::Factual,
        &[
            "facts", "data", "definitions", "concrete", "verifiable", "when", "where", "who",
            "capital", "population",
        ],
    ),
    (
        Category::Analytical,
        &[
            "comparison", "analysis", "processes", "complex", "compare", "contrast", "analyze",
            "explain", "pros", "cons",
        ],
    ),
    (
        Category::Creative,
        &[
            "original", "stories", "story", "poems", "poem", "imaginative", "imagine", "write",
            "create", "creative",
        ],
    ),
    (
        Category::Philosophical,
        &[
            "meaning", "ethics", "ethical", "consciousness", "abstract", "why", "philosophical",
        ],
    ),
    (
        Category::Personal,
        &[
            "advice", "personal", "opinions", "subjective", "improve", "should", "growth",
        ],
    ),
    (
        Category::Instructional,
        &[
            "step", "steps", "guide", "guides", "tutorial", "tutorials", "recipes", "procedural",
            "make",
        ],
    ),
];

/// Six-dimensional encoder with one axis per category.
///
/// Each component counts the text's words found in that category's
/// vocabulary. Category descriptions land exactly on their own axis, so
/// the space is well separated and similarities are easy to compute by hand.
#[derive(Debug, Default, Clone, Copy)]
pub struct AxisEncoder;

impl AxisEncoder {
    pub fn axis_of(category: Category) -> usize {
        AXIS_VOCABULARY
            .iter()
            .position(|(c, _)| *c == category)
            .unwrap_or(0)
    }
}

impl IPromptEncoder for AxisEncoder {
    fn encode(&self, text: &str) -> SmartTempResult<Vec<f32>> {
        let mut vec = vec![0.0f32; Category::COUNT];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .map(str::to_lowercase)
        {
            for (axis, (_, words)) in AXIS_VOCABULARY.iter().enumerate() {
                if words.contains(&word.as_str()) {
                    vec[axis] += 1.0;
                }
            }
        }
        Ok(vec)
    }

    fn dimensions(&self) -> usize {
        Category::COUNT
    }

    fn name(&self) -> &str {
        "axis"
    }
}

/// Encoder whose every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingEncoder;

impl IPromptEncoder for FailingEncoder {
    fn encode(&self, _text: &str) -> SmartTempResult<Vec<f32>> {
        Err(EncoderError::InferenceFailed {
            reason: "encoder offline".to_string(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        Category::COUNT
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Encodes category descriptions normally but fails on anything else.
/// Builds a valid profile store, then fails every analysis.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptFailingEncoder;

impl IPromptEncoder for PromptFailingEncoder {
    fn encode(&self, text: &str) -> SmartTempResult<Vec<f32>> {
        if Category::ALL
            .iter()
            .any(|c| c.embedding_description() == text)
        {
            AxisEncoder.encode(text)
        } else {
            FailingEncoder.encode(text)
        }
    }

    fn dimensions(&self) -> usize {
        Category::COUNT
    }

    fn name(&self) -> &str {
        "prompt-failing"
    }
}

/// Backend that replays a fixed script of `generate` results.
///
/// Once the script runs out every call returns a connection error.
pub struct ScriptedBackend {
    script: Mutex<VecDeque<Result<String, GenerationError>>>,
    calls: AtomicUsize,
    model: String,
}

impl ScriptedBackend {
    pub fn new(script: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
            model: "scripted".to_string(),
        }
    }

    /// Number of `generate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IGenerationBackend for ScriptedBackend {
    fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();
        next.unwrap_or_else(|| {
            Err(GenerationError::Connection {
                url: "scripted://".to_string(),
                reason: "script exhausted".to_string(),
            })
        })
    }

    fn list_models(&self) -> Result<Vec<String>, GenerationError> {
        Ok(vec![self.model.clone()])
    }

    fn ping(&self) -> Result<(), GenerationError> {
        Ok(())
    }

    fn model_info(&self) -> Result<serde_json::Value, GenerationError> {
        Ok(serde_json::json!({ "name": self.model }))
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn set_model(&mut self, model: String) {
        self.model = model;
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_land_on_their_own_axis() {
        for c in Category::ALL {
            let v = AxisEncoder.encode(c.embedding_description()).unwrap();
            for (axis, value) in v.iter().enumerate() {
                if axis == AxisEncoder::axis_of(c) {
                    assert!(*value > 0.0, "{c} description misses its own axis");
                } else {
                    assert_eq!(*value, 0.0, "{c} description leaks onto axis {axis}");
                }
            }
        }
    }

    #[test]
    fn golden_prompts_load() {
        let prompts = golden_prompts();
        assert_eq!(prompts.len(), 6);
        assert_eq!(prompts[0].expected_category, Category::Factual);
    }
}
