//! Configuration file support for recap.
//!
//! Loads configuration from `recap.toml` in the working directory, with
//! environment variables overriding the remote completion settings.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// The config file name
pub const CONFIG_FILE_NAME: &str = "recap.toml";

/// Top-level configuration loaded from `recap.toml`
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS (local development frontends)
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Remote completion service configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Full chat-completions endpoint URL (None = backend default)
    pub base_url: Option<String>,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Completion token cap
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            base_url: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

/// Summary retry configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryConfig {
    /// Maximum completion attempts before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Initial backoff between attempts, doubling per retry
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_model() -> String {
    "mistralai/mistral-7b-instruct".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_attempts() -> usize {
    5
}

fn default_backoff_ms() -> u64 {
    500
}

impl Config {
    /// Load configuration from the given path.
    ///
    /// Returns defaults when the file does not exist; a file that
    /// exists but fails to parse is a hard error. Environment
    /// overrides are applied either way.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            Config::default()
        };

        config.apply_env();
        Ok(config)
    }

    /// Environment variables override the configured completion
    /// settings: `OPENAI_BASE_URL` and `AGENT_MODEL`.
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            if !url.is_empty() {
                self.llm.base_url = Some(url);
            }
        }
        if let Ok(model) = std::env::var("AGENT_MODEL") {
            if !model.is_empty() {
                self.llm.model = model;
            }
        }
    }
}

impl LlmConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).with_context(|| {
            format!(
                "Completion API key not found in environment variable '{}'",
                self.api_key_env
            )
        })
    }
}
