//! Configuration management for the timetable console
//!
//! Values are layered, later layers winning:
//!
//! 1. built-in defaults
//! 2. TOML file (`TTADMIN_CONFIG`, else `<config dir>/ttadmin/config.toml`)
//! 3. environment (`TTADMIN_API_URL`, `TTADMIN_API_TIMEOUT_SECS`)
//! 4. the `--api-url` flag

use crate::error::{CliError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration Constants
// ============================================================================

/// REST API root when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Per-request timeout. XML imports of large files can take a while.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 120;

pub const ENV_CONFIG_PATH: &str = "TTADMIN_CONFIG";
pub const ENV_API_URL: &str = "TTADMIN_API_URL";
pub const ENV_API_TIMEOUT: &str = "TTADMIN_API_TIMEOUT_SECS";

/// Keys accepted by `ttadmin config get`
pub const KEYS: &[&str] = &["api_url", "timeout_secs", "config_file"];

/// Effective console configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub timeout_secs: u64,

    /// File the second layer was read from, when one existed
    #[serde(skip)]
    pub source_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            source_file: None,
        }
    }
}

impl Config {
    /// Where the config file is looked up
    pub fn default_path() -> Option<PathBuf> {
        match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join("ttadmin").join("config.toml")),
        }
    }

    /// Read one TOML file; unknown keys are ignored and missing keys keep defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let mut config: Config = toml::from_str(&raw).map_err(|e| {
            CliError::config(format!("Invalid config file '{}': {}", path.display(), e))
        })?;
        config.source_file = Some(path.to_path_buf());
        Ok(config)
    }

    /// Build the effective configuration
    pub fn load(api_url_flag: Option<&str>) -> Result<Self> {
        let path = Self::default_path();
        Self::load_layers(path.as_deref(), |key| std::env::var(key).ok(), api_url_flag)
    }

    fn load_layers(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
        api_url_flag: Option<&str>,
    ) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.is_file() => Self::from_file(path)?,
            _ => Self::default(),
        };

        if let Some(url) = env(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            config.api_url = url;
        }
        if let Some(raw) = env(ENV_API_TIMEOUT) {
            config.timeout_secs = raw.trim().parse().map_err(|_| {
                CliError::config(format!("{} must be a whole number of seconds, got '{}'", ENV_API_TIMEOUT, raw))
            })?;
        }
        if let Some(url) = api_url_flag.filter(|u| !u.trim().is_empty()) {
            config.api_url = url.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&mut self) -> Result<()> {
        let trimmed = self.api_url.trim().trim_end_matches('/').to_string();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(CliError::config(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CliError::config("timeout_secs must be greater than zero"));
        }
        self.api_url = trimmed;
        Ok(())
    }

    /// Value of one key, formatted for display
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api_url" => Ok(self.api_url.clone()),
            "timeout_secs" => Ok(self.timeout_secs.to_string()),
            "config_file" => Ok(self
                .source_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())),
            _ => Err(CliError::config(format!(
                "Unknown config key: {}. Known keys: {}",
                key,
                KEYS.join(", ")
            ))),
        }
    }
}
