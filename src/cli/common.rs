//! Types shared by all CLI command handlers.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::ConvertError;
use crate::models::MappingTable;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was understood but refused (wrong geometry, malformed mapping, bad arguments)
    ValidationError = 1,
    /// A file could not be read or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code for the process
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Refused input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ConvertError> for CliError {
    fn from(err: ConvertError) -> Self {
        let message = match &err {
            ConvertError::ResourceUnavailable { source, .. } => format!("{err}: {source}"),
            _ => err.to_string(),
        };

        match err {
            ConvertError::ResourceUnavailable { .. }
            | ConvertError::FileLoad { .. }
            | ConvertError::FileSave { .. } => Self::io(message),
            ConvertError::MalformedMapping { .. }
            | ConvertError::AmbiguousGeometry { .. }
            | ConvertError::IdenticalGeometry { .. } => Self::validation(message),
        }
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Resolves the mapping table for a command.
///
/// Precedence: `--mapping` flag, then `[mapping] file` from the config, then
/// the embedded table. Strict parsing is on if either the flag or the config
/// asks for it.
pub fn load_mapping_table(
    mapping: Option<&Path>,
    strict: bool,
    config: &Config,
) -> CliResult<MappingTable> {
    let strict = strict || config.mapping.strict;
    match mapping.or(config.mapping.file.as_deref()) {
        Some(path) => Ok(MappingTable::load(path, strict)?),
        None => Ok(MappingTable::embedded()),
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
