//! Convert command: remap a layout between the wired and wireless matrices.

use crate::cli::common::{load_mapping_table, print_json, CliResult};
use crate::config::Config;
use crate::services::{output_file_in, output_file_name, ConversionReport, ConversionService};
use clap::Args;
use std::path::PathBuf;

/// Convert the layout of one configuration into the geometry of another
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Configuration whose layout gets converted
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Configuration of the other keyboard family, provides every other field
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output path (defaults to <source>_converted_to_<target> next to the source)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Mapping file to use instead of the built-in table
    #[arg(long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Reject malformed mapping lines instead of reading them as index 0
    #[arg(long)]
    pub strict_mapping: bool,

    /// Run the conversion without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let table = load_mapping_table(self.mapping.as_deref(), self.strict_mapping, config)?;
        let output = self.output_path(config);

        let report = ConversionService::new(&table).convert_files(
            &self.source,
            &self.target,
            &output,
            self.dry_run,
        )?;

        if self.json {
            print_json(&report)?;
        } else {
            print_report(&report);
        }

        Ok(())
    }

    /// Output path: `--output`, else the configured directory, else next to the source.
    fn output_path(&self, config: &Config) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        match &config.output.directory {
            Some(directory) => output_file_in(directory, &self.source, &self.target),
            None => output_file_name(&self.source, &self.target),
        }
    }
}

fn print_report(report: &ConversionReport) {
    let summary = &report.summary;
    let direction = summary.direction;

    if report.written {
        println!(
            "✓ Converted {} layout to {}",
            direction.source(),
            direction.target()
        );
        println!("  Output: {}", report.output.display());
    } else {
        println!(
            "✓ Dry run: {} layout converts to {} (nothing written)",
            direction.source(),
            direction.target()
        );
        println!("  Would write: {}", report.output.display());
    }

    println!(
        "  Layers: {} converted, {} kept from target, {} dropped",
        summary.layers_converted, summary.layers_borrowed, summary.layers_dropped
    );
}
