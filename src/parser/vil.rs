//! Reading and writing `.vil` configuration files.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::models::{DocumentError, VilConfig};

/// Indentation of written documents.
const INDENT: &[u8] = b"    ";

/// Parses `.vil` text.
pub fn parse_vil(text: &str) -> std::result::Result<VilConfig, DocumentError> {
    let value: Value = serde_json::from_str(text)?;
    VilConfig::from_value(value)
}

/// Loads a `.vil` file from disk.
pub fn load_vil(path: &Path) -> Result<VilConfig> {
    let text = fs::read_to_string(path).map_err(|e| ConvertError::FileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let config = parse_vil(&text).map_err(|e| ConvertError::FileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(
        path = %path.display(),
        layers = config.layer_count(),
        "Loaded configuration"
    );
    Ok(config)
}

/// Renders a document with four-space indentation and no trailing newline.
pub fn to_vil_string(config: &VilConfig) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    config.document().serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Saves a document using an atomic write.
///
/// The content goes to `<path>.tmp` first and is renamed over `path`, so a
/// failed run never leaves a partial file behind.
pub fn save_vil(config: &VilConfig, path: &Path) -> Result<()> {
    let save_error = |reason: String| ConvertError::FileSave {
        path: path.to_path_buf(),
        reason,
    };

    let content = to_vil_string(config).map_err(|e| save_error(e.to_string()))?;

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, content).map_err(|e| {
        save_error(format!(
            "failed to write temporary file {}: {e}",
            temp_path.display()
        ))
    })?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(save_error(format!("failed to rename temporary file: {e}")));
    }

    debug!(path = %path.display(), "Saved configuration");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
