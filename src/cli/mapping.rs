//! Mapping command: report coverage of the position mapping table.

use crate::cli::common::{load_mapping_table, print_json, CliResult};
use crate::config::Config;
use crate::models::{Geometry, MappingTable};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show which key positions the mapping table covers
#[derive(Debug, Clone, Args)]
pub struct MappingArgs {
    /// Mapping file to check instead of the built-in table
    #[arg(long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Reject malformed mapping lines instead of reading them as index 0
    #[arg(long)]
    pub strict_mapping: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Unmapped key position
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
struct PositionOutput {
    index: usize,
    row: usize,
    col: usize,
}

/// JSON-serializable coverage report
#[derive(Serialize, Debug)]
struct MappingResponse {
    source: String,
    pairs: usize,
    complete: bool,
    unmapped_wired: Vec<PositionOutput>,
    unmapped_wireless: Vec<PositionOutput>,
}

impl MappingResponse {
    fn new(source: String, table: &MappingTable) -> Self {
        let unmapped_wired = unmapped_positions(table, Geometry::Wired);
        let unmapped_wireless = unmapped_positions(table, Geometry::Wireless);
        Self {
            source,
            pairs: table.len(),
            complete: unmapped_wired.is_empty() && unmapped_wireless.is_empty(),
            unmapped_wired,
            unmapped_wireless,
        }
    }
}

impl MappingArgs {
    /// Execute the mapping command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let table = load_mapping_table(self.mapping.as_deref(), self.strict_mapping, config)?;
        let source = self
            .mapping
            .as_ref()
            .or(config.mapping.file.as_ref())
            .map_or_else(|| "built-in".to_string(), |p| p.display().to_string());

        let response = MappingResponse::new(source, &table);

        if self.json {
            return print_json(&response);
        }

        println!("Mapping: {}", response.source);
        println!("Pairs:   {}", response.pairs);
        if response.complete {
            println!("✓ Every physical key of both layouts is mapped");
            return Ok(());
        }

        print_unmapped(Geometry::Wired, &response.unmapped_wired);
        print_unmapped(Geometry::Wireless, &response.unmapped_wireless);
        Ok(())
    }
}

fn unmapped_positions(table: &MappingTable, geometry: Geometry) -> Vec<PositionOutput> {
    table
        .unmapped_keys(geometry)
        .into_iter()
        .map(|index| PositionOutput {
            index,
            row: index / geometry.cols(),
            col: index % geometry.cols(),
        })
        .collect()
}

fn print_unmapped(geometry: Geometry, positions: &[PositionOutput]) {
    if positions.is_empty() {
        return;
    }

    println!("⚠ {} unmapped {} keys:", positions.len(), geometry);
    for position in positions {
        println!(
            "    index {:>2} (row {}, col {})",
            position.index, position.row, position.col
        );
    }
}
