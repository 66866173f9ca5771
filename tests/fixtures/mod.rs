//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the vil-convert binary
pub fn vil_convert_bin() -> &'static str {
    env!("CARGO_BIN_EXE_vil-convert")
}

/// Wired layer (4 x 12) with `"<tag>_<flat index>"` in every cell.
pub fn wired_layer(tag: &str) -> Vec<Vec<Value>> {
    numbered_layer(tag, 4, 12)
}

/// Wireless layer (8 x 7) with `"<tag>_<flat index>"` in every cell.
pub fn wireless_layer(tag: &str) -> Vec<Vec<Value>> {
    numbered_layer(tag, 8, 7)
}

/// Layer of any shape with `"<tag>_<flat index>"` in every cell.
pub fn numbered_layer(tag: &str, rows: usize, cols: usize) -> Vec<Vec<Value>> {
    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| json!(format!("{tag}_{}", row * cols + col)))
                .collect()
        })
        .collect()
}

/// Layer of any shape with the same value in every cell.
pub fn uniform_layer(value: &Value, rows: usize, cols: usize) -> Vec<Vec<Value>> {
    vec![vec![value.clone(); cols]; rows]
}

/// A Vial document with the usual top-level fields around `layers`.
pub fn vil_document(uid: u64, layers: Vec<Vec<Vec<Value>>>) -> Value {
    json!({
        "version": 1,
        "uid": uid,
        "layout": layers,
        "encoder_layout": [[["KC_VOLD", "KC_VOLU"]], [["KC_TRNS", "KC_TRNS"]]],
        "layout_options": -1,
        "macro": [["tap", "KC_A"], [], []],
        "vial_protocol": 6,
        "via_protocol": 9,
        "tap_dance": [["KC_ESC", "KC_CAPS", "KC_NO", "KC_NO", 200]],
        "combo": [["KC_J", "KC_K", "KC_NO", "KC_NO", "KC_ESC"]],
        "key_override": [{"trigger": "KC_BSPC", "replacement": "KC_DEL", "layers": 65535}],
        "settings": {"1": 0, "2": 50, "7": 200}
    })
}

/// Writes `value` as a four-space indented `.vil` file.
pub fn write_vil(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    serde::Serialize::serialize(value, &mut serializer).expect("Failed to serialize fixture");
    fs::write(&path, buffer).expect("Failed to write fixture");
    path
}

/// Reads a `.vil` file back as JSON.
pub fn read_vil(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("Failed to read output file");
    serde_json::from_str(&text).expect("Output is not valid JSON")
}

/// Creates a temp dir holding a wireless source and a wired target.
///
/// The source has `source_layers` layers, the target `target_layers`.
pub fn wireless_to_wired_files(
    source_layers: usize,
    target_layers: usize,
) -> (PathBuf, PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = vil_document(
        1,
        (0..source_layers)
            .map(|i| wireless_layer(&format!("S{i}")))
            .collect(),
    );
    let target = vil_document(
        2,
        (0..target_layers)
            .map(|i| wired_layer(&format!("T{i}")))
            .collect(),
    );

    let source_path = write_vil(temp_dir.path(), "wireless.vil", &source);
    let target_path = write_vil(temp_dir.path(), "wired.vil", &target);
    (source_path, target_path, temp_dir)
}

/// Runs the binary with a config file that does not exist yet in `dir`.
///
/// This keeps tests independent of the user's real configuration.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("config.toml");
    Command::new(vil_convert_bin())
        .args(args)
        .arg("--config")
        .arg(&config)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Stdout as a string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
