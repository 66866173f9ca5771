//! Conversion orchestration.
//!
//! Sequences classification, transcoding and layer reconciliation, and merges
//! the result into the target configuration. [`ConversionService`] wraps the
//! same pipeline with file loading and saving.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ConfigRole, ConvertError, Result};
use crate::models::{Direction, KeyboardKind, MappingTable, VilConfig};
use crate::parser;
use crate::services::{classifier, reconciler, transcoder};

/// What a conversion did to the layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    /// Direction that was applied
    pub direction: Direction,
    /// Layers of the result that were converted from the source
    pub layers_converted: usize,
    /// Layers of the result copied unconverted from the target
    pub layers_borrowed: usize,
    /// Source layers dropped because the target has fewer
    pub layers_dropped: usize,
}

/// Result of an in-memory conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Target configuration with the converted layout
    pub config: VilConfig,
    /// Layer statistics
    pub summary: ConversionSummary,
}

/// Picks the conversion direction for a pair of classified configurations.
pub fn direction_for(source: KeyboardKind, target: KeyboardKind) -> Result<Direction> {
    let source_geometry = source.geometry().ok_or(ConvertError::AmbiguousGeometry {
        role: ConfigRole::Source,
    })?;
    let target_geometry = target.geometry().ok_or(ConvertError::AmbiguousGeometry {
        role: ConfigRole::Target,
    })?;

    Direction::between(source_geometry, target_geometry)
        .ok_or(ConvertError::IdenticalGeometry { kind: source })
}

/// Converts the layout of `source` into the geometry of `target`.
///
/// The returned configuration is `target` with only its `layout` replaced.
pub fn convert(
    source: &VilConfig,
    target: &VilConfig,
    table: &MappingTable,
) -> Result<Conversion> {
    let source_kind = classifier::classify(source);
    let target_kind = classifier::classify(target);
    debug!(%source_kind, %target_kind, "Classified configurations");

    let direction = direction_for(source_kind, target_kind)?;

    let transcoded = transcoder::transcode(source.layout(), direction, table);
    let converted = transcoded.len();
    let target_layers = target.layer_count();
    let layout = reconciler::reconcile(transcoded, target.layout());

    let summary = ConversionSummary {
        direction,
        layers_converted: converted.min(target_layers),
        layers_borrowed: target_layers.saturating_sub(converted),
        layers_dropped: converted.saturating_sub(target_layers),
    };
    debug!(?summary, "Reconciled layer count");

    Ok(Conversion {
        config: target.clone().with_layout(layout),
        summary,
    })
}

/// Outcome of a file conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Source configuration path
    pub source: PathBuf,
    /// Target configuration path
    pub target: PathBuf,
    /// Where the result was (or would have been) written
    pub output: PathBuf,
    /// False for dry runs
    pub written: bool,
    /// Layer statistics
    #[serde(flatten)]
    pub summary: ConversionSummary,
}

/// File-level conversion service.
///
/// Holds the mapping table for the lifetime of a run; every conversion
/// loads both documents, converts in memory and writes the output once.
pub struct ConversionService<'a> {
    table: &'a MappingTable,
}

impl<'a> ConversionService<'a> {
    /// Creates a service using `table` for index lookups.
    #[must_use]
    pub const fn new(table: &'a MappingTable) -> Self {
        Self { table }
    }

    /// Converts `source` against `target` and writes the result to `output`.
    ///
    /// Nothing is written unless the whole in-memory conversion succeeds.
    /// With `dry_run` set the output file is not written at all.
    pub fn convert_files(
        &self,
        source: &Path,
        target: &Path,
        output: &Path,
        dry_run: bool,
    ) -> Result<ConversionReport> {
        let source_config = parser::load_vil(source)?;
        let target_config = parser::load_vil(target)?;

        let conversion = convert(&source_config, &target_config, self.table)?;

        if !dry_run {
            parser::save_vil(&conversion.config, output)?;
        }

        info!(
            direction = %conversion.summary.direction,
            output = %output.display(),
            dry_run,
            "Conversion finished"
        );

        Ok(ConversionReport {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            output: output.to_path_buf(),
            written: !dry_run,
            summary: conversion.summary,
        })
    }
}
