use clap::Args;
use smarttemp_classifier::SmartTempEngine;
use smarttemp_core::SmartTempConfig;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Prompt to classify
    pub prompt: String,

    /// Number of best-matching categories to show
    #[arg(long, default_value_t = 3)]
    pub top: usize,
}

pub fn run(config: &SmartTempConfig, args: &AnalyzeArgs, json: bool) -> anyhow::Result<()> {
    let engine = SmartTempEngine::from_config(config);
    let analysis = engine.analyze(&args.prompt);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", output::render_analysis(&engine, &analysis, args.top));
    }
    Ok(())
}
