use clap::Args;
use smarttemp_classifier::SmartTempEngine;
use smarttemp_core::models::HistoryLog;
use smarttemp_core::SmartTempConfig;
use smarttemp_generation::GenerationClient;

use crate::output;

#[derive(Args)]
pub struct GenerateArgs {
    /// Prompt to send
    pub prompt: String,

    /// Use this temperature instead of analyzing the prompt
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Token limit (defaults to backend.max_tokens)
    #[arg(long)]
    pub max_tokens: Option<u32>,
}

pub fn run(config: &SmartTempConfig, args: &GenerateArgs, json: bool) -> anyhow::Result<()> {
    let mut history = HistoryLog::new();

    let temperature = match args.temperature {
        Some(t) => {
            history.record_fixed(&args.prompt, t);
            t
        }
        None => {
            let engine = SmartTempEngine::from_config(config);
            let analysis = engine.analyze(&args.prompt);
            if !json {
                print!("{}", output::render_analysis(&engine, &analysis, 2));
                println!();
            }
            history.record(&analysis);
            analysis.temperature
        }
    };

    let client = GenerationClient::from_config(config);
    let outcome = client.generate(&args.prompt, temperature, args.max_tokens);

    if json {
        let value = serde_json::json!({
            "history": history.entries(),
            "outcome": outcome,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", output::render_outcome(&outcome));
    }
    Ok(())
}
