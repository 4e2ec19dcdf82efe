//! Backend housekeeping commands.

use smarttemp_core::SmartTempConfig;
use smarttemp_generation::GenerationClient;

pub fn health(config: &SmartTempConfig, json: bool) -> anyhow::Result<()> {
    let client = GenerationClient::from_config(config);
    let healthy = client.health_check();
    if json {
        println!(
            "{}",
            serde_json::json!({
                "backend": client.backend_name(),
                "url": config.backend.trimmed_base_url(),
                "healthy": healthy,
            })
        );
    } else if healthy {
        println!("{} at {}: healthy", client.backend_name(), config.backend.trimmed_base_url());
    } else {
        println!(
            "{} at {}: unreachable (responses will use offline fallback text)",
            client.backend_name(),
            config.backend.trimmed_base_url()
        );
    }
    Ok(())
}

pub fn models(config: &SmartTempConfig, json: bool) -> anyhow::Result<()> {
    let client = GenerationClient::from_config(config);
    let models = client.list_models();
    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
    } else {
        for model in models {
            let marker = if model == client.model() { "*" } else { " " };
            println!("{marker} {model}");
        }
    }
    Ok(())
}

pub fn info(config: &SmartTempConfig) -> anyhow::Result<()> {
    let client = GenerationClient::from_config(config);
    println!("{}", serde_json::to_string_pretty(&client.model_info())?);
    Ok(())
}
