use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsonConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

pub struct Config {
    pub login_endpoint: String,
    pub verbose: bool,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Self {
        // A malformed config file falls back to defaults
        let json_config = JsonConfig::load().unwrap_or_default();

        // Endpoint: CLI args > env var > JSON config > default
        let login_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env::var("HOTELDESK_API_ENDPOINT").ok())
            .or(json_config.api.endpoint.clone())
            .map(|endpoint| {
                // Accept a base URL and append the login route if needed
                if endpoint.ends_with("/api/auth/login") {
                    endpoint
                } else if endpoint.ends_with("/api") {
                    format!("{}/auth/login", endpoint)
                } else {
                    format!("{}/api/auth/login", endpoint.trim_end_matches('/'))
                }
            })
            .unwrap_or_else(|| "http://localhost:8080/api/auth/login".to_string());

        // Verbose: CLI flag > env var > JSON config > default
        let verbose = args.verbose
            || env::var("HOTELDESK_VERBOSE")
                .ok()
                .map(|v| v == "true")
                .or(json_config.session.verbose)
                .unwrap_or(false);

        Config {
            login_endpoint,
            verbose,
        }
    }
}

impl JsonConfig {
    pub fn load() -> Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                let config: JsonConfig = serde_json::from_str(&contents)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(JsonConfig::default())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(
                home_dir
                    .join(".config")
                    .join("hoteldesk")
                    .join("config.json"),
            );
        }
        paths
    }
}
