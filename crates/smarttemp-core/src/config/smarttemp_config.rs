//! Top-level SmartTemp configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    BackendConfig, EncoderConfig, EngineConfig, FallbackConfig, ObservabilityConfig,
    ProfileConfig,
};
use crate::category::Category;
use crate::constants::{MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "smarttemp.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SMARTTEMP_*`)
/// 3. Project config (`smarttemp.toml` in project root)
/// 4. User config (`~/.smarttemp/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SmartTempConfig {
    pub engine: EngineConfig,
    pub encoder: EncoderConfig,
    pub profiles: ProfileConfig,
    pub backend: BackendConfig,
    pub fallback: FallbackConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub classifier: Option<String>,
    pub temperature_strategy: Option<String>,
    pub base_temperature: Option<f64>,
    pub scale_factor: Option<f64>,
    pub encoder_provider: Option<String>,
    pub backend_kind: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
    pub max_retries: Option<u32>,
    pub simulate_latency: Option<bool>,
}

impl SmartTempConfig {
    /// Load configuration with layered resolution.
    ///
    /// Files are merged key-by-key at the TOML level, so a project file that
    /// sets only `backend.model` keeps everything else from the user file.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut merged = toml::Table::new();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                match read_table(&user_config_path) {
                    Ok(table) => merge_tables(&mut merged, table),
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(path = %user_config_path.display(), error = %err, "skipping unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            merge_tables(&mut merged, read_table(&project_config_path)?);
        }

        let mut config: SmartTempConfig =
            toml::Value::Table(merged)
                .try_into()
                .map_err(|e: toml::de::Error| ConfigError::ParseError {
                    path: "<merged>".to_string(),
                    message: e.to_string(),
                })?;

        // Layer 2: environment variables
        config.apply_env_overrides(|key| std::env::var(key).ok());

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        tracing::debug!(
            classifier = %config.engine.classifier,
            backend = %config.backend.kind,
            model = %config.backend.model,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let temp_range = MIN_TEMPERATURE..=MAX_TEMPERATURE;

        if !temp_range.contains(&self.engine.base_temperature) {
            return Err(invalid("engine.base_temperature", "must be between 0.1 and 1.0"));
        }
        if !temp_range.contains(&self.engine.scale_factor) {
            return Err(invalid("engine.scale_factor", "must be between 0.1 and 1.0"));
        }
        if !matches!(self.engine.classifier.as_str(), "embedding" | "keyword") {
            return Err(invalid("engine.classifier", "must be \"embedding\" or \"keyword\""));
        }
        if !matches!(self.engine.effective_strategy(), "tiered" | "linear") {
            return Err(invalid(
                "engine.temperature_strategy",
                "must be \"tiered\" or \"linear\"",
            ));
        }
        if !matches!(self.encoder.provider.as_str(), "hashing" | "ollama") {
            return Err(invalid("encoder.provider", "must be \"hashing\" or \"ollama\""));
        }
        if self.encoder.dimensions == 0 {
            return Err(invalid("encoder.dimensions", "must be greater than 0"));
        }
        // Override values are not range-checked; the controller clamps its output.
        for name in self.profiles.base_temperatures.keys() {
            if name.parse::<Category>().is_err() {
                return Err(invalid(
                    &format!("profiles.base_temperatures.{name}"),
                    "unknown category",
                ));
            }
        }
        if !matches!(self.backend.kind.as_str(), "ollama" | "openai") {
            return Err(invalid("backend.kind", "must be \"ollama\" or \"openai\""));
        }
        if self.backend.base_url.trim().is_empty() {
            return Err(invalid("backend.base_url", "must not be empty"));
        }
        if self.backend.model.trim().is_empty() {
            return Err(invalid("backend.model", "must not be empty"));
        }
        let timeouts = [
            ("encoder.timeout_secs", self.encoder.timeout_secs),
            ("backend.connect_timeout_secs", self.backend.connect_timeout_secs),
            ("backend.generate_timeout_secs", self.backend.generate_timeout_secs),
            ("backend.chat_timeout_secs", self.backend.chat_timeout_secs),
            ("backend.metadata_timeout_secs", self.backend.metadata_timeout_secs),
            ("backend.health_timeout_secs", self.backend.health_timeout_secs),
        ];
        if let Some((field, _)) = timeouts.iter().find(|(_, secs)| *secs == 0) {
            return Err(invalid(field, "must be greater than 0"));
        }
        if self.backend.max_tokens == 0 {
            return Err(invalid("backend.max_tokens", "must be greater than 0"));
        }
        if self.backend.initial_backoff_ms > self.backend.max_backoff_ms {
            return Err(invalid(
                "backend.initial_backoff_ms",
                "must not exceed backend.max_backoff_ms",
            ));
        }
        Ok(())
    }

    /// Apply `SMARTTEMP_*` overrides read through `lookup`.
    ///
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("SMARTTEMP_CLASSIFIER") {
            self.engine.classifier = v;
        }
        if let Some(v) = lookup("SMARTTEMP_TEMPERATURE_STRATEGY") {
            self.engine.temperature_strategy = Some(v);
        }
        if let Some(v) = lookup("SMARTTEMP_BASE_TEMPERATURE").and_then(|v| v.parse().ok()) {
            self.engine.base_temperature = v;
        }
        if let Some(v) = lookup("SMARTTEMP_SCALE_FACTOR").and_then(|v| v.parse().ok()) {
            self.engine.scale_factor = v;
        }
        if let Some(v) = lookup("SMARTTEMP_ENCODER") {
            self.encoder.provider = v;
        }
        if let Some(v) = lookup("SMARTTEMP_BACKEND") {
            self.backend.kind = v;
        }
        if let Some(v) = lookup("SMARTTEMP_BASE_URL") {
            self.backend.base_url = v;
        }
        if let Some(v) = lookup("SMARTTEMP_MODEL") {
            self.backend.model = v;
        }
        if let Some(v) = lookup("SMARTTEMP_API_KEY") {
            self.backend.api_key = Some(v);
        }
        if let Some(v) = lookup("SMARTTEMP_MAX_TOKENS").and_then(|v| v.parse().ok()) {
            self.backend.max_tokens = v;
        }
        if let Some(v) = lookup("SMARTTEMP_MAX_RETRIES").and_then(|v| v.parse().ok()) {
            self.backend.max_retries = v;
        }
        if let Some(v) = lookup("SMARTTEMP_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Apply CLI flag overrides.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref v) = cli.classifier {
            self.engine.classifier = v.clone();
        }
        if let Some(ref v) = cli.temperature_strategy {
            self.engine.temperature_strategy = Some(v.clone());
        }
        if let Some(v) = cli.base_temperature {
            self.engine.base_temperature = v;
        }
        if let Some(v) = cli.scale_factor {
            self.engine.scale_factor = v;
        }
        if let Some(ref v) = cli.encoder_provider {
            self.encoder.provider = v.clone();
        }
        if let Some(ref v) = cli.backend_kind {
            self.backend.kind = v.clone();
        }
        if let Some(ref v) = cli.base_url {
            self.backend.base_url = v.clone();
        }
        if let Some(ref v) = cli.model {
            self.backend.model = v.clone();
        }
        if let Some(ref v) = cli.api_key {
            self.backend.api_key = Some(v.clone());
        }
        if let Some(v) = cli.max_tokens {
            self.backend.max_tokens = v;
        }
        if let Some(v) = cli.max_retries {
            self.backend.max_retries = v;
        }
        if let Some(v) = cli.simulate_latency {
            self.fallback.simulate_latency = v;
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.display().to_string(),
    })?;
    content.parse::<toml::Table>().map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Recursively merge `other` into `base`. Nested tables merge; any other
/// value in `other` replaces the one in `base`.
fn merge_tables(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Returns the user config path: `~/.smarttemp/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".smarttemp").join("config.toml"))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_unset_nested_keys() {
        let mut base: toml::Table = "[backend]\nmodel = \"mistral\"\nmax_tokens = 100\n"
            .parse()
            .unwrap();
        let other: toml::Table = "[backend]\nmodel = \"codellama\"\n".parse().unwrap();
        merge_tables(&mut base, other);

        let backend = base["backend"].as_table().unwrap();
        assert_eq!(backend["model"].as_str(), Some("codellama"));
        assert_eq!(backend["max_tokens"].as_integer(), Some(100));
    }
}
