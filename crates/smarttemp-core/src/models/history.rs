//! Caller-owned history of analyses and generations.
//!
//! The engine never holds or mutates one of these. Front ends create a log,
//! pass it where needed, and append what the engine returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AnalysisResult;

const PREVIEW_CHARS: usize = 50;

/// A single recorded temperature decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub prompt_preview: String,
    /// Category name, or "fixed" when the caller bypassed analysis.
    pub category: String,
    pub confidence: f64,
    pub temperature: f64,
}

/// Append-only log of temperature decisions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an analysis.
    pub fn record(&mut self, analysis: &AnalysisResult) {
        self.entries.push(HistoryEntry {
            timestamp: Utc::now(),
            prompt_preview: preview(&analysis.prompt),
            category: analysis.category.to_string(),
            confidence: analysis.confidence,
            temperature: analysis.temperature,
        });
    }

    /// Record a generation at a caller-chosen temperature (no analysis).
    pub fn record_fixed(&mut self, prompt: &str, temperature: f64) {
        self.entries.push(HistoryEntry {
            timestamp: Utc::now(),
            prompt_preview: preview(prompt),
            category: "fixed".to_string(),
            confidence: 1.0,
            temperature,
        });
    }

    /// The last `n` entries, newest first.
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn preview(prompt: &str) -> String {
    if prompt.chars().count() > PREVIEW_CHARS {
        let head: String = prompt.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        prompt.to_string()
    }
}
