use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    #[serde(default)]
    pub pots: PotsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

/// Pot rows are never created through the API; `seed` inserts the two
/// deployed pots into an empty table at startup.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PotsConfig {
    #[serde(default)]
    pub seed: bool,
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

impl Config {
    /// Load configuration from file with environment variable substitution
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("APP_CONFIG").unwrap_or_else(|_| "config/config.yaml".to_string());

        tracing::info!("Loading configuration from: {}", config_path);

        let config_content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;

        let config = Self::from_yaml(&config_content)?;

        tracing::info!("Configuration loaded successfully");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = substitute_env_vars(content)?;
        serde_yaml::from_str(&content).context("Failed to parse config YAML")
    }

    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    pub fn api_bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}

/// Substitute environment variables in format $(VAR_NAME)
fn substitute_env_vars(content: &str) -> Result<String> {
    let mut result = content.to_string();
    let re = regex::Regex::new(r"\$\(([A-Z_]+)\)").context("Invalid substitution pattern")?;

    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        let var_value = env::var(var_name)
            .with_context(|| format!("Environment variable {} not set", var_name))?;
        result = result.replace(&format!("$({})", var_name), &var_value);
    }

    Ok(result)
}
