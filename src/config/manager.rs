use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::StartupError;
use crate::paths;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-0301";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_LOG_FILE: &str = "interaction.log";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Settings in the `[chat]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the OpenAI-compatible API.
    pub endpoint: Option<String>,
    /// Model name sent with every request.
    pub model: Option<String>,
    /// Sampling temperature (0.0 to 2.0).
    pub temperature: Option<f32>,
    /// Path of the interaction log.
    pub log_file: Option<PathBuf>,
    /// Environment variable holding the API key.
    pub api_key_env: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/chatline/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub log_file: Option<PathBuf>,
}

/// Configuration after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub log_file: PathBuf,
    /// Name of the environment variable the API key is read from.
    pub api_key_env: String,
}

impl ResolvedConfig {
    /// Reads the API key from the configured environment variable.
    ///
    /// An empty value counts as missing.
    pub fn api_key(&self) -> Result<String, StartupError> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| StartupError::MissingApiKey {
                env_var: self.api_key_env.clone(),
            })
    }
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, StartupError> {
    let file = &config_file.chat;

    let temperature = options
        .temperature
        .or(file.temperature)
        .unwrap_or(DEFAULT_TEMPERATURE);
    if !(0.0..=2.0).contains(&temperature) {
        return Err(StartupError::InvalidTemperature(temperature));
    }

    Ok(ResolvedConfig {
        endpoint: options
            .endpoint
            .clone()
            .or_else(|| file.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        model: options
            .model
            .clone()
            .or_else(|| file.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        temperature,
        log_file: options
            .log_file
            .clone()
            .or_else(|| file.log_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        api_key_env: file
            .api_key_env
            .clone()
            .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string()),
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/chatline/config.toml`
    /// or `~/.config/chatline/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads the config file. A missing file yields the default configuration.
    pub fn load(&self) -> Result<ConfigFile, StartupError> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ConfigFile::default()),
            Err(e) => {
                return Err(StartupError::InvalidConfig {
                    path: self.config_path.clone(),
                    message: e.to_string(),
                });
            }
        };

        toml::from_str(&contents).map_err(|e| StartupError::InvalidConfig {
            path: self.config_path.clone(),
            message: e.to_string(),
        })
    }
}
