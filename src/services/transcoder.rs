//! Layout transcoding between the wired and wireless matrices.
//!
//! # Algorithm
//!
//! For every source layer, in order:
//!
//! 1. Allocate a destination matrix of the target geometry filled with `KC_NO`
//! 2. Walk the source cells row-major and compute each flat index with the
//!    source row width (12 wired, 7 wireless)
//! 3. Look the index up in the mapping table; unmapped cells are dropped
//! 4. Split the mapped index with the destination row width and copy the cell
//!    verbatim if the position is inside the matrix
//! 5. Overwrite every sentinel position of the destination with `-1`
//!
//! Several source cells may map to the same destination cell. The last one in
//! row-major order wins, so the traversal order is part of the output format.

use serde_json::Value;

use crate::constants::{EMPTY_KEY_MARKER, NO_KEY_KEYCODE};
use crate::models::{Direction, Geometry, Layer, Layout, MappingTable};

/// Converts every layer of `source` into the other geometry.
#[must_use]
pub fn transcode(source: &[Layer], direction: Direction, table: &MappingTable) -> Layout {
    source
        .iter()
        .map(|layer| transcode_layer(layer, direction, table))
        .collect()
}

/// Converts a single layer.
///
/// Missing mappings and destinations outside the matrix are silently
/// skipped. Ragged source rows are walked as they are.
#[must_use]
pub fn transcode_layer(
    layer: &[Vec<Value>],
    direction: Direction,
    table: &MappingTable,
) -> Layer {
    let from = direction.source();
    let to = direction.target();
    let mut destination = blank_layer(to);

    for (row_idx, row) in layer.iter().enumerate() {
        for (col_idx, key) in row.iter().enumerate() {
            let source_index = from.flat_index(row_idx, col_idx);

            let Some(mapped) = table.lookup(direction, source_index) else {
                continue;
            };

            if let Some((row, col)) = to.position_of(mapped) {
                destination[row][col] = key.clone();
            }
        }
    }

    apply_sentinels(&mut destination, to);
    destination
}

/// A layer of `geometry` with every cell set to `KC_NO`.
#[must_use]
pub fn blank_layer(geometry: Geometry) -> Layer {
    vec![vec![no_key(); geometry.cols()]; geometry.rows()]
}

/// Writes the empty marker into every sentinel position of `layer`.
pub fn apply_sentinels(layer: &mut Layer, geometry: Geometry) {
    for &(row, col) in geometry.sentinels() {
        if let Some(cell) = layer.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = empty_marker();
        }
    }
}

/// Value of an unassigned key.
#[must_use]
pub fn no_key() -> Value {
    Value::from(NO_KEY_KEYCODE)
}

/// Value of a position without a physical key.
#[must_use]
pub fn empty_marker() -> Value {
    Value::from(EMPTY_KEY_MARKER)
}
