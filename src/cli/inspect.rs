//! Inspect command: report the keyboard family of a configuration.

use crate::cli::common::{print_json, CliResult};
use crate::models::{KeyboardKind, VilConfig};
use crate::parser;
use crate::services::classify;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show the keyboard type and layer count of a configuration file
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Configuration file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable inspection result
#[derive(Serialize, Debug, PartialEq, Eq)]
struct InspectResponse {
    file: String,
    kind: KeyboardKind,
    layers: usize,
    /// Row count of layer 0
    rows: usize,
    /// Cell count of each row of layer 0
    columns: Vec<usize>,
    fields: Vec<String>,
}

impl InspectResponse {
    fn new(file: String, config: &VilConfig) -> Self {
        let first = config.layout().first();
        Self {
            file,
            kind: classify(config),
            layers: config.layer_count(),
            rows: first.map_or(0, Vec::len),
            columns: first
                .map(|layer| layer.iter().map(Vec::len).collect())
                .unwrap_or_default(),
            fields: config.field_names().map(str::to_string).collect(),
        }
    }
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let config = parser::load_vil(&self.file)?;
        let response = InspectResponse::new(self.file.display().to_string(), &config);

        if self.json {
            return print_json(&response);
        }

        println!("File:     {}", response.file);
        println!("Keyboard: {}", response.kind);
        println!("Layers:   {}", response.layers);
        println!("Layer 0:  {} rows ({})", response.rows, describe_columns(&response.columns));
        println!("Fields:   {}", response.fields.join(", "));

        Ok(())
    }
}

/// "12 columns" when all rows agree, otherwise the per-row counts.
fn describe_columns(columns: &[usize]) -> String {
    match columns.split_first() {
        None => "no rows".to_string(),
        Some((first, rest)) if rest.iter().all(|c| c == first) => format!("{first} columns"),
        Some(_) => {
            let counts: Vec<String> = columns.iter().map(ToString::to_string).collect();
            format!("columns per row: {}", counts.join("/"))
        }
    }
}
