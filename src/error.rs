//! Error types for loading, converting and saving Vial configurations.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::KeyboardKind;

/// Which side of a conversion a configuration file plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigRole {
    /// The configuration whose layout gets converted
    Source,
    /// The configuration that provides the output structure
    Target,
}

impl fmt::Display for ConfigRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// Errors from the conversion pipeline.
///
/// Every variant is terminal for a run. Mapping misses and out-of-bounds
/// destinations are not errors and never show up here.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Mapping resource could not be read
    #[error("Mapping resource unavailable: {}", path.display())]
    ResourceUnavailable {
        /// Path of the resource
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Mapping line rejected by strict parsing
    #[error("Malformed mapping line {line}: {content:?}")]
    MalformedMapping {
        /// 1-based line number in the resource
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// Configuration file unreadable or not a Vial document
    #[error("Failed to load {}: {reason}", path.display())]
    FileLoad {
        /// Path of the configuration file
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Layer 0 matches neither the wired nor the wireless matrix
    #[error(
        "Cannot determine the keyboard type of the {role} configuration \
         (layer 0 is neither 4x12 nor 8x7)"
    )]
    AmbiguousGeometry {
        /// Which file could not be classified
        role: ConfigRole,
    },

    /// Source and target belong to the same keyboard family
    #[error("Source and target are both {kind} configurations, nothing to convert")]
    IdenticalGeometry {
        /// The shared keyboard kind
        kind: KeyboardKind,
    },

    /// Converted configuration could not be written
    #[error("Failed to save {}: {reason}", path.display())]
    FileSave {
        /// Destination path
        path: PathBuf,
        /// What went wrong
        reason: String,
    },
}

/// Result alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
