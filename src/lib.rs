//! VIL Convert Library
//!
//! This library converts Vial keyboard configurations between the wired
//! (4x12) and wireless (8x7) key matrices. It provides the mapping table,
//! layout classification, transcoding and layer reconciliation, plus the
//! file handling and command handlers used by the `vil-convert` binary.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;

pub use error::{ConvertError, Result};
