//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_DIR_NAME;

/// Mapping resource settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MappingConfig {
    /// External mapping file used instead of the embedded table
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Reject malformed mapping lines instead of reading them as index 0
    #[serde(default)]
    pub strict: bool,
}

/// Output file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Directory for converted files (defaults to the source file's directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/VilConvert/config.toml`
/// - macOS: `~/Library/Application Support/VilConvert/config.toml`
/// - Windows: `%APPDATA%\VilConvert\config.toml`
///
/// # Example
///
/// ```toml
/// [mapping]
/// file = "/home/me/keyboards/custom_mapping.txt"
/// strict = true
///
/// [output]
/// directory = "/home/me/keyboards/converted"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Mapping resource settings
    #[serde(default)]
    pub mapping: MappingConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from an explicit path.
    ///
    /// If the file doesn't exist, returns default configuration. Paths inside
    /// the file are not checked here: a mapping file that has gone missing
    /// must fail the command that reads it, not silently reset the settings.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values before saving.
    ///
    /// Checks that the output directory exists and is a directory (if set).
    /// The mapping file is checked by `config set` when it is chosen, and by
    /// the mapping loader on every run.
    pub fn validate(&self) -> Result<()> {
        if let Some(directory) = &self.output.directory {
            if !directory.is_dir() {
                anyhow::bail!(
                    "Output directory does not exist: {}",
                    directory.display()
                );
            }
        }

        Ok(())
    }
}
