//! Application configuration.
//!
//! Settings are read from an optional JSON file under the user config
//! directory and can be overridden through environment variables. The only
//! external collaborator that needs configuration is the text-generation
//! service.

use std::{env, fs, path::PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Default base URL of the text-generation API.
const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier for insight and extraction requests.
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// API key for the text-generation service
    pub api_key: Option<String>,

    /// Base URL of the text-generation API
    pub api_base_url: String,

    /// Model identifier used for all generation requests
    pub model: String,

    /// Per-request timeout in seconds for generation calls
    pub request_timeout_secs: u64,

    /// Whether a fresh session starts with the sample notes and actions
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            api_base_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: 30,
            seed_sample_data: true,
        }
    }
}

impl Config {
    /// Loads configuration from the default location with environment
    /// overrides applied.
    ///
    /// A missing config file is not an error; defaults are used. A file
    /// that exists but fails to parse is.
    pub fn load(path_override: Option<PathBuf>) -> Result<Self> {
        let path = path_override.or_else(Self::default_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                let raw = fs::read_to_string(&path)?;
                serde_json::from_str(&raw)?
            }
            Some(path) => {
                debug!("No config file at {}, using defaults", path.display());
                Config::default()
            }
            None => {
                warn!("Could not resolve a config directory, using defaults");
                Config::default()
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Default config file location: `<config_dir>/glownotes/config.json`.
    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glownotes").join("config.json"))
    }

    /// Applies `GLOW_API_KEY`, `GLOW_API_URL`, and `GLOW_MODEL` overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = env::var("GLOW_API_KEY") {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Ok(url) = env::var("GLOW_API_URL") {
            if !url.is_empty() {
                self.api_base_url = url;
            }
        }
        if let Ok(model) = env::var("GLOW_MODEL") {
            if !model.is_empty() {
                self.model = model;
            }
        }
    }

    /// Full URL for a `generateContent` call against the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base_url.trim_end_matches('/'),
            self.model
        )
    }
}
