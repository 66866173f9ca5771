//! Service layer for business logic.
//!
//! This module contains the conversion engine (classification, transcoding,
//! layer reconciliation) and the orchestration that ties it to files.

pub mod classifier;
pub mod converter;
pub mod output;
pub mod reconciler;
pub mod transcoder;

// Re-export commonly used types and functions
pub use classifier::{classify, classify_layout};
pub use converter::{
    convert, direction_for, Conversion, ConversionReport, ConversionService, ConversionSummary,
};
pub use output::{output_file_in, output_file_name};
pub use reconciler::reconcile;
pub use transcoder::{transcode, transcode_layer};
