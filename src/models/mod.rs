//! Data models for keyboard geometries, mapping tables and Vial documents.
//!
//! This module contains the core data structures used by the conversion services.
//! Models are independent of file handling and the command line.

pub mod geometry;
pub mod mapping_table;
pub mod vil_config;

// Re-export all model types
pub use geometry::{Direction, Geometry, KeyboardKind, MatrixPosition};
pub use mapping_table::MappingTable;
pub use vil_config::{DocumentError, Layer, Layout, VilConfig, LAYOUT_FIELD};
