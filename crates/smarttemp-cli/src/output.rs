//! Human-readable rendering of analysis and generation results.

use std::fmt::Write;

use smarttemp_classifier::SmartTempEngine;
use smarttemp_core::models::GenerationSource;
use smarttemp_core::{AnalysisResult, GenerationOutcome};

pub fn render_analysis(engine: &SmartTempEngine, analysis: &AnalysisResult, top: usize) -> String {
    let name = analysis.category.as_str();
    let (lo, hi) = engine.range(name);
    let mut out = String::new();
    let _ = writeln!(out, "Category:    {name} ({})", engine.describe(name));
    let _ = writeln!(out, "Confidence:  {:.3}", analysis.confidence);
    let _ = writeln!(
        out,
        "Temperature: {:.2}  (optimal range {lo:.1}-{hi:.1})",
        analysis.temperature
    );
    if !analysis.all_similarities.is_empty() && top > 0 {
        let _ = writeln!(out, "Top matches: {}", render_top(analysis, top));
    }
    if let Some(ref error) = analysis.error {
        let _ = writeln!(out, "Warning:     analysis degraded ({error})");
    }
    out
}

pub fn render_top(analysis: &AnalysisResult, n: usize) -> String {
    analysis
        .top_k(n)
        .iter()
        .map(|(c, s)| format!("{c} {s:.3}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_outcome(outcome: &GenerationOutcome) -> String {
    let source = match &outcome.source {
        GenerationSource::Backend { name } => format!("{name} backend"),
        GenerationSource::Fallback { .. } => "offline fallback".to_string(),
    };
    format!(
        "[{source}, temperature {:.2}, {} ms]\n\n{}\n",
        outcome.temperature, outcome.elapsed_ms, outcome.text
    )
}

/// First `max_chars` characters, with "..." when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_cuts_on_char_boundaries() {
        assert_eq!(preview("héllo wörld", 5), "héllo...");
        assert_eq!(preview("short", 10), "short");
    }
}
