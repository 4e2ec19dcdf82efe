//! Canonical walkthrough: six labelled prompts, then one prompt at three
//! reference temperatures.

use clap::Args;
use smarttemp_classifier::SmartTempEngine;
use smarttemp_core::models::HistoryLog;
use smarttemp_core::{Category, SmartTempConfig};
use smarttemp_generation::GenerationClient;

use crate::output;

const EXAMPLE_PROMPTS: [(&str, Category); 6] = [
    ("What is the population of Tokyo, Japan as of 2024?", Category::Factual),
    (
        "Write a creative short story about a robot who becomes an artist",
        Category::Creative,
    ),
    ("How do I change a flat tire on a car step by step?", Category::Instructional),
    (
        "Compare and contrast machine learning with traditional programming approaches",
        Category::Analytical,
    ),
    (
        "What is the meaning of happiness according to different philosophical traditions?",
        Category::Philosophical,
    ),
    (
        "How can I improve my time management skills for better productivity?",
        Category::Personal,
    ),
];

const GENERATION_PROMPT: &str = "Explain the concept of artificial intelligence";
const REFERENCE_TEMPERATURES: [f64; 3] = [0.1, 0.5, 0.9];
const PREVIEW_CHARS: usize = 200;

#[derive(Args)]
pub struct ExamplesArgs {
    /// Only run the analysis half
    #[arg(long)]
    pub skip_generation: bool,
}

pub fn run(config: &SmartTempConfig, args: &ExamplesArgs) -> anyhow::Result<()> {
    let engine = SmartTempEngine::from_config(config);
    let mut history = HistoryLog::new();
    let mut matched = 0;

    println!("== Prompt analysis ({} classifier) ==", engine.classifier_name());
    for (i, (prompt, expected)) in EXAMPLE_PROMPTS.iter().enumerate() {
        let analysis = engine.analyze(prompt);
        if analysis.category == *expected {
            matched += 1;
        }
        println!("\n{}. {prompt}", i + 1);
        println!("   detected: {} (expected: {expected})", analysis.category);
        println!(
            "   confidence: {:.3}  temperature: {:.2}",
            analysis.confidence, analysis.temperature
        );
        println!("   top: {}", output::render_top(&analysis, 2));
        history.record(&analysis);
    }
    println!("\n{matched}/{} matched the expected category", EXAMPLE_PROMPTS.len());

    if args.skip_generation {
        return Ok(());
    }

    let client = GenerationClient::from_config(config);
    println!("\n== Generation ({}, model {}) ==", client.backend_name(), client.model());
    if !client.health_check() {
        println!("backend unreachable, showing offline fallback text");
    }
    for temperature in REFERENCE_TEMPERATURES {
        let outcome = client.generate(GENERATION_PROMPT, temperature, Some(150));
        history.record_fixed(GENERATION_PROMPT, temperature);
        println!("\n-- temperature {temperature:.1} --");
        println!("{}", output::preview(&outcome.text, PREVIEW_CHARS));
    }

    println!("\n== Session history ({} entries, newest first) ==", history.len());
    for entry in history.recent(history.len()) {
        println!(
            "{}  {:<13} {:.2}  {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.category,
            entry.temperature,
            entry.prompt_preview
        );
    }
    Ok(())
}
