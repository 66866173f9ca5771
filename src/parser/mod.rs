//! Parsing and serialization for the tool's file formats.
//!
//! This module handles reading and writing Vial `.vil` documents and parsing
//! the wired/wireless position mapping resource.

pub mod mapping;
pub mod vil;

// Re-export commonly used functions
pub use mapping::{parse_mapping, parse_mapping_strict, MappingEntry};
pub use vil::{load_vil, parse_vil, save_vil, to_vil_string};
