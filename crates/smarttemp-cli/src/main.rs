//! SmartTemp CLI
//!
//! # Commands
//!
//! - `analyze`: classify a prompt and print the derived temperature
//! - `generate`: analyze (unless a temperature is given) and generate text
//! - `health`: probe the generation backend
//! - `models`: list backend models
//! - `info`: show metadata for the configured model
//! - `examples`: run the canonical example prompts end to end
//! - `config`: print the resolved configuration
//!
//! Results go to stdout, logs to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use smarttemp_core::config::{CliOverrides, SmartTempConfig};
use smarttemp_core::tracing_setup::init_tracing_with_config;

mod commands;
mod output;

/// Intent-aware temperature selection for LLM prompts
#[derive(Parser)]
#[command(name = "smarttemp")]
#[command(version)]
#[command(about = "Classify prompts, derive a sampling temperature, and generate text")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory searched for smarttemp.toml
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Classifier: embedding or keyword
    #[arg(long, global = true)]
    classifier: Option<String>,

    /// Temperature strategy: tiered or linear
    #[arg(long, global = true)]
    strategy: Option<String>,

    /// Backend kind: ollama or openai
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Backend base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Model name
    #[arg(long, global = true)]
    model: Option<String>,

    /// API key for OpenAI-compatible backends
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Retries for transient backend failures
    #[arg(long, global = true)]
    retries: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a prompt and derive its temperature
    Analyze(commands::analyze::AnalyzeArgs),
    /// Generate a response at the analyzed (or given) temperature
    Generate(commands::generate::GenerateArgs),
    /// Check whether the generation backend is reachable
    Health,
    /// List models served by the backend
    Models,
    /// Show metadata for the configured model
    Info,
    /// Run the example prompts through analysis and generation
    Examples(commands::examples::ExamplesArgs),
    /// Print the resolved configuration as TOML
    Config,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            classifier: self.classifier.clone(),
            temperature_strategy: self.strategy.clone(),
            backend_kind: self.backend.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key: self.api_key.clone(),
            max_retries: self.retries,
            ..Default::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = SmartTempConfig::load(&cli.config_dir, Some(&cli.overrides()))
        .context("failed to load configuration")?;

    match cli.verbose {
        0 => {}
        1 => config.observability.log_level = "info".into(),
        2 => config.observability.log_level = "debug".into(),
        _ => config.observability.log_level = "trace".into(),
    }
    init_tracing_with_config(&config.observability);
    tracing::debug!(
        classifier = %config.engine.classifier,
        backend = %config.backend.kind,
        model = %config.backend.model,
        "smarttemp cli starting"
    );

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(&config, &args, cli.json),
        Commands::Generate(args) => commands::generate::run(&config, &args, cli.json),
        Commands::Health => commands::backend::health(&config, cli.json),
        Commands::Models => commands::backend::models(&config, cli.json),
        Commands::Info => commands::backend::info(&config),
        Commands::Examples(args) => commands::examples::run(&config, &args),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "smarttemp",
            "analyze",
            "What is 2+2?",
            "--classifier",
            "keyword",
            "--model",
            "mistral",
            "--retries",
            "2",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.classifier.as_deref(), Some("keyword"));
        assert_eq!(overrides.model.as_deref(), Some("mistral"));
        assert_eq!(overrides.max_retries, Some(2));
        assert!(overrides.base_url.is_none());
        assert!(matches!(cli.command, Commands::Analyze(ref a) if a.prompt == "What is 2+2?" && a.top == 3));
    }

    #[test]
    fn generate_accepts_fixed_temperature() {
        let cli = Cli::try_parse_from(["smarttemp", "generate", "hi", "-t", "0.9", "--max-tokens", "64"])
            .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.temperature, Some(0.9));
                assert_eq!(args.max_tokens, Some(64));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn verbosity_counts_repeated_flags() {
        let cli = Cli::try_parse_from(["smarttemp", "-vv", "health"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["smarttemp"]).is_err());
    }
}
