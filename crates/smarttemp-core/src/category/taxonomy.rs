use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SmartTempError;

/// The six prompt categories the engine distinguishes.
///
/// Declaration order is the store's iteration order, which decides ties
/// between equally similar categories in the embedding classifier (first
/// maximum wins).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Factual,
    Analytical,
    Creative,
    Philosophical,
    Personal,
    Instructional,
}

impl Category {
    /// Total number of categories.
    pub const COUNT: usize = 6;

    /// All variants in iteration order.
    pub const ALL: [Category; 6] = [
        Self::Factual,
        Self::Analytical,
        Self::Creative,
        Self::Philosophical,
        Self::Personal,
        Self::Instructional,
    ];

    /// Category used for empty input and classifier failures.
    pub const DEFAULT: Category = Self::Analytical;

    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Factual => "factual",
            Self::Analytical => "analytical",
            Self::Creative => "creative",
            Self::Philosophical => "philosophical",
            Self::Personal => "personal",
            Self::Instructional => "instructional",
        }
    }

    /// Canonical temperature at high confidence.
    pub fn base_temperature(&self) -> f64 {
        match self {
            Self::Factual => 0.1,
            Self::Instructional => 0.3,
            Self::Analytical => 0.5,
            Self::Personal => 0.6,
            Self::Philosophical => 0.7,
            Self::Creative => 0.9,
        }
    }

    /// Informational sampling range; never enforced on output.
    pub fn optimal_range(&self) -> (f64, f64) {
        match self {
            Self::Factual => (0.1, 0.3),
            Self::Instructional => (0.2, 0.4),
            Self::Analytical => (0.4, 0.6),
            Self::Personal => (0.5, 0.7),
            Self::Philosophical => (0.6, 0.8),
            Self::Creative => (0.7, 1.0),
        }
    }

    /// Short human-readable summary shown next to an analysis.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Factual => "Precise, factual information with low temperature for accuracy",
            Self::Analytical => "Balanced analysis with moderate temperature",
            Self::Creative => "Imaginative and exploratory with high temperature",
            Self::Philosophical => "Thoughtful exploration with medium-high temperature",
            Self::Personal => "Empathic and contextual with medium temperature",
            Self::Instructional => "Clear, step-by-step with medium-low temperature",
        }
    }

    /// Long description fed to the prompt encoder to build the category embedding.
    pub fn embedding_description(&self) -> &'static str {
        match self {
            Self::Factual => {
                "Questions seeking specific facts, data, definitions, or concrete information. \
                 Examples: what, when, where, who questions about verifiable information."
            }
            Self::Analytical => {
                "Requests for comparison, analysis, explanation of processes, or breaking down \
                 complex topics. Examples: compare, analyze, explain how, pros and cons."
            }
            Self::Creative => {
                "Prompts requesting original content, stories, poems, ideas, or imaginative \
                 scenarios. Examples: write a story, create, imagine, generate ideas."
            }
            Self::Philosophical => {
                "Questions about meaning, ethics, consciousness, abstract concepts, or deep \
                 reasoning. Examples: why, meaning of, ethical implications, philosophical questions."
            }
            Self::Personal => {
                "Requests for advice, personal development, opinions, or subjective guidance. \
                 Examples: how to improve, advice for, what should I do, personal growth."
            }
            Self::Instructional => {
                "Step-by-step guides, tutorials, recipes, or procedural information. \
                 Examples: how to make, steps to, tutorial, guide to."
            }
        }
    }

    /// Lowercase substrings the rule-based classifier counts.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Factual => &[
                "what",
                "when",
                "where",
                "who",
                "capital",
                "population",
                "temperature",
                "height",
                "how many",
            ],
            Self::Creative => &[
                "write", "story", "poem", "creative", "imagine", "create", "invent", "fiction",
            ],
            Self::Instructional => &[
                "how to",
                "make",
                "cook",
                "step",
                "instructions",
                "tutorial",
                "guide",
                "recipe",
            ],
            Self::Analytical => &[
                "compare",
                "analyze",
                "explain",
                "difference",
                "similar",
                "contrast",
                "pros and cons",
            ],
            Self::Personal => &[
                "advice",
                "should i",
                "help me",
                "improve",
                "better",
                "suggest",
                "recommend",
            ],
            Self::Philosophical => &[
                "why", "meaning", "purpose", "exist", "life", "universe", "ethical",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SmartTempError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| SmartTempError::UnknownCategory {
                name: s.to_string(),
            })
    }
}
