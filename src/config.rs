// Configuration module for hubseek
// Handles loading and parsing configuration from ~/.config/hubseek/config.toml

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::github::client::DEFAULT_ENDPOINT;

/// Search configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Result rows requested per search (API range 1..=100)
    #[serde(default = "default_per_page")]
    pub per_page: u8,
    /// Repository search endpoint; overridable for self-hosted mirrors
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_per_page() -> u8 {
    30
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            per_page: default_per_page(),
            endpoint: default_endpoint(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/hubseek/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config: {}", e)),
        },
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/hubseek/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("hubseek")
        .join("config.toml")
}
