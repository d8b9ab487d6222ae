// Rust guideline compliant 2026-10-19

//! Configuration management for Pile.

use crate::validation::MAX_PAGE_LIMIT;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Progress information.
    Info,
    /// Diagnostic detail.
    Debug,
    /// Everything.
    Trace,
}

impl std::str::FromStr for LogLevel {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(Error::Config(format!(
                "log level must be error, warn, info, debug, or trace, got {}",
                value
            ))),
        }
    }
}

/// Configuration for Pile behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum hours between two syncs or imports of the same user (0 disables).
    #[serde(default = "default_sync_cooldown")]
    pub sync_cooldown_hours: u32,

    /// Page size used when a listing does not ask for one.
    #[serde(default = "default_page_limit")]
    pub default_page_limit: usize,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Default log verbosity.
    #[serde(default)]
    pub log_level: LogLevel,
}

/// One sync per day.
fn default_sync_cooldown() -> u32 {
    24
}

fn default_page_limit() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sync_cooldown_hours: default_sync_cooldown(),
            default_page_limit: default_page_limit(),
            output_format: OutputFormat::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.pile/config.toml`
    /// 3. Environment variables with `PILE_` prefix
    ///
    /// # Arguments
    ///
    /// * `pile_dir` - Path to the `.pile` directory
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(pile_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = pile_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PILE_SYNC_COOLDOWN_HOURS` - Hours between syncs (0 disables)
    /// - `PILE_DEFAULT_PAGE_LIMIT` - Default listing page size
    /// - `PILE_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `PILE_LOG_LEVEL` - Log verbosity
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PILE_SYNC_COOLDOWN_HOURS") {
            self.sync_cooldown_hours = val.parse().map_err(|_| {
                Error::Config("PILE_SYNC_COOLDOWN_HOURS must be a non-negative number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("PILE_DEFAULT_PAGE_LIMIT") {
            self.default_page_limit = val.parse().map_err(|_| {
                Error::Config("PILE_DEFAULT_PAGE_LIMIT must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("PILE_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "PILE_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("PILE_LOG_LEVEL") {
            self.log_level = val.parse()?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_page_limit` is outside 1..=1000.
    fn validate(&self) -> Result<()> {
        if self.default_page_limit == 0 || self.default_page_limit > MAX_PAGE_LIMIT {
            return Err(Error::Config(format!(
                "default_page_limit must be 1-{}, got {}",
                MAX_PAGE_LIMIT, self.default_page_limit
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `pile_dir` - Path to the `.pile` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, pile_dir: &Path) -> Result<()> {
        let config_path = pile_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
