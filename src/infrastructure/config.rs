use crate::application::translate::{TranslateOptions, DEFAULT_MAX_CHUNK_CHARS};
use crate::domain::error::TranslateError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    pub http_proxy: Option<String>,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Logging {
    /// Filter level for the diagnostic stream.
    ///
    /// Disabling logging drops progress but keeps warnings, so chunks left
    /// untranslated are still reported on stderr.
    pub fn filter_level(&self) -> &'static str {
        if !self.enable {
            return "warn";
        }
        match self.level.to_uppercase().as_str() {
            "TRACE" => "trace",
            "DEBUG" => "debug",
            "INFO" => "info",
            "WARN" => "warn",
            "ERROR" => "error",
            _ => "info",
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_chunk_chars: default_max_chunk_chars(),
            request_delay_ms: default_request_delay_ms(),
            timeout_secs: default_timeout_secs(),
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            http_proxy: None,
            logging: Logging::default(),
        }
    }
}

impl Config {
    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            max_chunk_chars: self.max_chunk_chars,
            request_delay: Duration::from_millis(self.request_delay_ms),
        }
    }
}

// Defaults
fn default_max_chunk_chars() -> usize {
    DEFAULT_MAX_CHUNK_CHARS
}
fn default_request_delay_ms() -> u64 {
    100
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_user_agent() -> String {
    concat!("doctrans/", env!("CARGO_PKG_VERSION")).to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "INFO".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("doctrans").join("config.toml"))
}

pub fn load_config() -> Result<Config, TranslateError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load config from `path`, falling back to defaults when the file is
/// missing or unparsable.
pub fn load_config_from(path: &Path) -> Result<Config, TranslateError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    match parse_config(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, TranslateError> {
    let config = toml::from_str::<Config>(content)?;
    if config.max_chunk_chars == 0 {
        return Err(TranslateError::Config(
            "max_chunk_chars must be greater than zero".to_string(),
        ));
    }
    Ok(config)
}

pub fn generate_config_sample() -> Result<(), TranslateError> {
    match get_config_path() {
        Some(path) => generate_config_sample_at(&path),
        None => Err(TranslateError::Config(
            "Cannot determine config directory".to_string(),
        )),
    }
}

pub fn generate_config_sample_at(path: &Path) -> Result<(), TranslateError> {
    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let sample = Config::default();
    let toml_content = toml::to_string_pretty(&sample)
        .map_err(|e| TranslateError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| TranslateError::Config(format!("Failed to write config file: {}", e)))?;
    println!("Generated config file at: {}", path.display());

    Ok(())
}
