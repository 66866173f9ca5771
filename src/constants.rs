//! Application-wide constants.
//!
//! This module defines the application name plus the fixed tokens that the
//! Vial file format uses for unassigned and physically absent keys.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "VIL Convert";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "vil-convert";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "VilConvert";

/// Keycode written into destination cells that receive no key.
pub const NO_KEY_KEYCODE: &str = "KC_NO";

/// Value Vial stores at matrix positions without a physical switch.
pub const EMPTY_KEY_MARKER: i64 = -1;

/// Infix of generated output file names: `<source>_converted_to_<target>`.
pub const OUTPUT_NAME_INFIX: &str = "_converted_to_";
