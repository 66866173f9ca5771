//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Mapping file used instead of the built-in table
    #[arg(long, value_name = "FILE", conflicts_with = "builtin_mapping")]
    mapping_file: Option<PathBuf>,

    /// Go back to the built-in mapping table
    #[arg(long)]
    builtin_mapping: bool,

    /// Strict mapping parsing (true or false)
    #[arg(long, value_name = "BOOL")]
    strict_mapping: Option<bool>,

    /// Directory for converted files
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    mapping: MappingOutput,
    output: OutputOutput,
}

#[derive(Serialize, Debug)]
struct MappingOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    strict: bool,
}

#[derive(Serialize, Debug)]
struct OutputOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    directory: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config_path),
            ConfigCommand::Set(args) => args.execute(config_path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        let config = Config::load_from(config_path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config_output(config_path, &config))
        } else {
            output_human_readable(config_path, &config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        if self.mapping_file.is_none()
            && !self.builtin_mapping
            && self.strict_mapping.is_none()
            && self.output_dir.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --mapping-file, --builtin-mapping, --strict-mapping, or --output-dir",
            ));
        }

        let mut config = Config::load_from(config_path).unwrap_or_default();

        if let Some(path) = &self.mapping_file {
            if !path.is_file() {
                return Err(CliError::validation(format!(
                    "Mapping file does not exist: {}",
                    path.display()
                )));
            }
            config.mapping.file = Some(path.clone());
        }

        if self.builtin_mapping {
            config.mapping.file = None;
        }

        if let Some(strict) = self.strict_mapping {
            config.mapping.strict = strict;
        }

        if let Some(path) = &self.output_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    path.display()
                ))
            })?;
            config.output.directory = Some(path.clone());
        }

        if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::io(format!(
                    "Failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        config
            .save_to(config_path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn config_output(config_path: &Path, config: &Config) -> ConfigOutput {
    ConfigOutput {
        config_file: config_path.display().to_string(),
        mapping: MappingOutput {
            file: config
                .mapping
                .file
                .as_ref()
                .map(|p| p.display().to_string()),
            strict: config.mapping.strict,
        },
        output: OutputOutput {
            directory: config
                .output
                .directory
                .as_ref()
                .map(|p| p.display().to_string()),
        },
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config_path: &Path, config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!("File: {}", config_path.display());
    println!();

    println!("Mapping:");
    match &config.mapping.file {
        Some(path) => println!("  File:   {}", path.display()),
        None => println!("  File:   (built-in)"),
    }
    println!("  Strict: {}", config.mapping.strict);
    println!();

    println!("Output:");
    match &config.output.directory {
        Some(path) => println!("  Directory: {}", path.display()),
        None => println!("  Directory: (next to the source file)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_output_defaults() {
        let output = config_output(Path::new("/cfg/config.toml"), &Config::new());
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["config_file"], "/cfg/config.toml");
        assert_eq!(json["mapping"]["strict"], false);
        assert!(json["mapping"].get("file").is_none());
        assert!(json["output"].get("directory").is_none());
    }

    #[test]
    fn test_config_output_with_values() {
        let mut config = Config::new();
        config.mapping.file = Some(PathBuf::from("/maps/custom.txt"));
        config.output.directory = Some(PathBuf::from("/out"));

        let json = serde_json::to_value(config_output(Path::new("c.toml"), &config)).unwrap();

        assert_eq!(json["mapping"]["file"], "/maps/custom.txt");
        assert_eq!(json["output"]["directory"], "/out");
    }
}
