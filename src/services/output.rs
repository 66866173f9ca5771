//! Output file naming.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::OUTPUT_NAME_INFIX;

/// Builds `<source dir>/<source stem>_converted_to_<target file name>`.
///
/// Only the last extension of the source is stripped (a leading dot counts
/// as one); the target keeps its full file name, extension included.
#[must_use]
pub fn output_file_name(source: &Path, target: &Path) -> PathBuf {
    let directory = source.parent().unwrap_or_else(|| Path::new(""));
    directory.join(output_base_name(source, target))
}

/// Same name as [`output_file_name`], placed in `directory` instead.
#[must_use]
pub fn output_file_in(directory: &Path, source: &Path, target: &Path) -> PathBuf {
    directory.join(output_base_name(source, target))
}

fn output_base_name(source: &Path, target: &Path) -> OsString {
    let mut name = source_stem(source);
    name.push(OUTPUT_NAME_INFIX);
    if let Some(target_name) = target.file_name() {
        name.push(target_name);
    }
    name
}

/// Source file name up to its last dot.
///
/// Unlike [`Path::file_stem`], a leading dot starts an extension too, so
/// `.vil` leaves an empty stem.
fn source_stem(source: &Path) -> OsString {
    let Some(name) = source.file_name() else {
        return OsString::new();
    };

    match name.to_str().and_then(|n| n.rfind('.').map(|dot| &n[..dot])) {
        Some(stem) => OsString::from(stem),
        None => source.file_stem().map(OsString::from).unwrap_or_default(),
    }
}
