// Rust guideline compliant 2026-02-06

//! Configuration management for Helpdesk.

use crate::error::{Error, Result};
use crate::models::Priority;
use crate::visibility::VisibilityOptions;
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

impl OutputFormat {
    /// Parses a format name.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "table" => Some(OutputFormat::Table),
            "plain" => Some(OutputFormat::Plain),
            _ => None,
        }
    }
}

/// Configuration for Helpdesk behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Priority given to new tickets when none is specified.
    #[serde(default)]
    pub default_priority: Priority,

    /// Whether staff also stop seeing rejected tickets in the general list.
    #[serde(default)]
    pub admin_hides_rejected: bool,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Username to act as when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_priority: Priority::default(),
            admin_hides_rejected: false,
            output_format: OutputFormat::default(),
            default_user: None,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.helpdesk/config.toml`
    /// 3. Environment variables with `HELPDESK_` prefix
    ///
    /// # Arguments
    ///
    /// * `helpdesk_dir` - Path to the `.helpdesk` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(helpdesk_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = helpdesk_dir.join("config.toml");
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
    /// - `HELPDESK_DEFAULT_PRIORITY` - Default priority (high/medium/low)
    /// - `HELPDESK_ADMIN_HIDES_REJECTED` - Hide rejected tickets from staff (true/false)
    /// - `HELPDESK_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `HELPDESK_USER` - Username to act as
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("HELPDESK_DEFAULT_PRIORITY") {
            self.default_priority = Priority::from_name(&val).ok_or_else(|| {
                Error::Config("HELPDESK_DEFAULT_PRIORITY must be high, medium, or low".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("HELPDESK_ADMIN_HIDES_REJECTED") {
            self.admin_hides_rejected = val.parse().map_err(|_| {
                Error::Config("HELPDESK_ADMIN_HIDES_REJECTED must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("HELPDESK_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::from_name(&val).ok_or_else(|| {
                Error::Config("HELPDESK_OUTPUT_FORMAT must be json, table, or plain".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("HELPDESK_USER") {
            self.default_user = Some(val);
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_user` is set but blank.
    fn validate(&self) -> Result<()> {
        if let Some(user) = &self.default_user {
            if user.trim().is_empty() {
                return Err(Error::Config("default_user cannot be blank".to_string()));
            }
        }
        Ok(())
    }

    /// Returns the visibility options derived from this configuration.
    #[must_use]
    pub fn visibility(&self) -> VisibilityOptions {
        VisibilityOptions {
            admin_hides_rejected: self.admin_hides_rejected,
        }
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, helpdesk_dir: &Path) -> Result<()> {
        let config_path = helpdesk_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
