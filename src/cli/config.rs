//! Configuration management for medassist
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.medassist/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bundle::DEFAULT_BUNDLE_PATH;
use crate::errors::{AssistantError, Result};
use crate::report::DEFAULT_TOP_K;

/// Complete configuration for medassist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bundle: BundleConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Model bundle location configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    pub path: String,
}

/// Evaluation report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub top_k: usize,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_BUNDLE_PATH.to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AssistantError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| AssistantError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".medassist").join("config.toml");
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.bundle.path.trim().is_empty() {
            return Err(AssistantError::ConfigError(
                "bundle path must not be empty".to_string(),
            ));
        }

        if self.report.top_k == 0 {
            return Err(AssistantError::ConfigError(
                "report top_k must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &PathBuf) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| AssistantError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AssistantError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AssistantError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Effective bundle path: CLI flag wins over config file
    pub fn bundle_path(&self, cli_override: Option<&PathBuf>) -> PathBuf {
        cli_override
            .cloned()
            .unwrap_or_else(|| PathBuf::from(&self.bundle.path))
    }
}
