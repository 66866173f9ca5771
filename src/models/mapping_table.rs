//! Position correspondence between the wired and wireless matrices.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::models::{Direction, Geometry};
use crate::parser::mapping::{parse_mapping, parse_mapping_strict, MappingEntry};

/// Mapping resource compiled into the binary.
const EMBEDDED_MAPPING: &str = include_str!("keyboard_conf_mapping.txt");

/// Bidirectional flat-index table between the two matrices.
///
/// Both directions are filled from the same resource lines, so every
/// `wired -> wireless` pair has its inverse. The table is neither required to
/// be injective nor total: later lines overwrite earlier ones for the same
/// key, and indices that never appear are simply not mapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    /// Wired flat index → wireless flat index
    wired_to_wireless: HashMap<i64, i64>,
    /// Wireless flat index → wired flat index
    wireless_to_wired: HashMap<i64, i64>,
}

impl MappingTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one `wired,wireless` pair in both directions.
    pub fn insert(&mut self, wired: i64, wireless: i64) {
        self.wired_to_wireless.insert(wired, wireless);
        self.wireless_to_wired.insert(wireless, wired);
    }

    /// Builds a table from parsed resource lines, in order.
    pub fn from_entries(entries: impl IntoIterator<Item = MappingEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            if let Some(&previous) = table.wired_to_wireless.get(&entry.wired) {
                debug!(
                    line = entry.line,
                    wired = entry.wired,
                    previous,
                    wireless = entry.wireless,
                    "Mapping line overrides an earlier pair"
                );
            }
            table.insert(entry.wired, entry.wireless);
        }
        table
    }

    /// Parses resource text, defaulting unparseable fields to 0.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_entries(parse_mapping(text))
    }

    /// Parses resource text, failing on the first malformed line.
    pub fn parse_strict(text: &str) -> Result<Self> {
        Ok(Self::from_entries(parse_mapping_strict(text)?))
    }

    /// The table shipped inside the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_MAPPING)
    }

    /// Loads an external mapping resource.
    pub fn load(path: &Path, strict: bool) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConvertError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let table = if strict {
            Self::parse_strict(&text)?
        } else {
            Self::parse(&text)
        };

        debug!(
            path = %path.display(),
            pairs = table.len(),
            "Loaded mapping resource"
        );
        Ok(table)
    }

    /// Looks up the destination flat index of a source flat index.
    #[must_use]
    pub fn lookup(&self, direction: Direction, index: usize) -> Option<i64> {
        let index = i64::try_from(index).ok()?;
        let table = match direction {
            Direction::WiredToWireless => &self.wired_to_wireless,
            Direction::WirelessToWired => &self.wireless_to_wired,
        };
        table.get(&index).copied()
    }

    /// Wired → wireless pairs.
    #[must_use]
    pub const fn wired_to_wireless(&self) -> &HashMap<i64, i64> {
        &self.wired_to_wireless
    }

    /// Wireless → wired pairs.
    #[must_use]
    pub const fn wireless_to_wired(&self) -> &HashMap<i64, i64> {
        &self.wireless_to_wired
    }

    /// Number of distinct wired indices in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wired_to_wireless.len()
    }

    /// Returns true if no pair was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wired_to_wireless.is_empty()
    }

    /// Flat indices of physical keys in `geometry` that the table does not map.
    ///
    /// Sentinel positions are left out since they never carry a key.
    #[must_use]
    pub fn unmapped_keys(&self, geometry: Geometry) -> Vec<usize> {
        let direction = match geometry {
            Geometry::Wired => Direction::WiredToWireless,
            Geometry::Wireless => Direction::WirelessToWired,
        };

        (0..geometry.cell_count())
            .filter(|&index| {
                let position = (index / geometry.cols(), index % geometry.cols());
                !geometry.is_sentinel(position) && self.lookup(direction, index).is_none()
            })
            .collect()
    }
}
