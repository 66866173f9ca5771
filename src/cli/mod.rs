//! CLI command handlers for vil-convert.
//!
//! Each subcommand has an `Args` struct parsed by clap and an `execute`
//! method returning a [`CliResult`] whose error carries the exit code.

pub mod common;
pub mod config;
pub mod convert;
pub mod inspect;
pub mod mapping;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use inspect::InspectArgs;
pub use mapping::MappingArgs;
