//! Parser for the wired/wireless position mapping resource.
//!
//! # Format
//!
//! ```text
//! # comment
//! <wired flat index>,<wireless flat index>
//! ```
//!
//! Lines are trimmed. Blank lines and `#` comments are skipped, as are lines
//! that do not split into exactly two fields.

use tracing::{debug, warn};

use crate::error::{ConvertError, Result};

/// One accepted `wired,wireless` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry {
    /// 1-based line number in the resource
    pub line: usize,
    /// Flat index in the 4 x 12 matrix
    pub wired: i64,
    /// Flat index in the 8 x 7 matrix
    pub wireless: i64,
}

/// Parses mapping lines, tolerating malformed index fields.
///
/// A field is read as an optionally signed decimal prefix (`"12abc"` reads as
/// 12). A field without any leading digits becomes 0.
pub fn parse_mapping(text: &str) -> Vec<MappingEntry> {
    significant_lines(text)
        .filter_map(|(line, content)| {
            let Some((wired, wireless)) = split_pair(content) else {
                debug!(line, content, "Skipping mapping line without exactly two fields");
                return None;
            };

            Some(MappingEntry {
                line,
                wired: scan_index(wired, line),
                wireless: scan_index(wireless, line),
            })
        })
        .collect()
}

/// Parses mapping lines, rejecting anything that is not `<uint>,<uint>`.
pub fn parse_mapping_strict(text: &str) -> Result<Vec<MappingEntry>> {
    significant_lines(text)
        .map(|(line, content)| {
            let malformed = || ConvertError::MalformedMapping {
                line,
                content: content.to_string(),
            };

            let (wired, wireless) = split_pair(content).ok_or_else(malformed)?;
            let wired = wired.parse::<u32>().map_err(|_| malformed())?;
            let wireless = wireless.parse::<u32>().map_err(|_| malformed())?;

            Ok(MappingEntry {
                line,
                wired: i64::from(wired),
                wireless: i64::from(wireless),
            })
        })
        .collect()
}

/// Yields trimmed, non-blank, non-comment lines with 1-based line numbers.
fn significant_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Splits `a,b` into its two trimmed fields.
fn split_pair(content: &str) -> Option<(&str, &str)> {
    let mut fields = content.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(first), Some(second), None) => Some((first.trim(), second.trim())),
        _ => None,
    }
}

fn scan_index(field: &str, line: usize) -> i64 {
    scan_leading_int(field).unwrap_or_else(|| {
        warn!(line, field, "Unparseable mapping index, using 0");
        0
    })
}

/// Reads an optionally signed run of leading ASCII digits.
fn scan_leading_int(field: &str) -> Option<i64> {
    let (negative, digits) = match field.as_bytes().first() {
        Some(b'-') => (true, &field[1..]),
        Some(b'+') => (false, &field[1..]),
        _ => (false, field),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i64>().ok()?;

    Some(if negative { -value } else { value })
}
