//! Layer-count alignment with the target configuration.

use std::cmp::Ordering;

use crate::models::{Layer, Layout};

/// Aligns the number of layers in `layout` with `target`.
///
/// - more layers than the target: the extra layers are dropped
/// - fewer layers: the missing trailing layers are copied verbatim from
///   `target` (they already have the target geometry)
/// - same count: unchanged
///
/// The result always has `target.len()` layers.
#[must_use]
pub fn reconcile(mut layout: Layout, target: &[Layer]) -> Layout {
    match layout.len().cmp(&target.len()) {
        Ordering::Greater => layout.truncate(target.len()),
        Ordering::Less => {
            let converted = layout.len();
            layout.extend_from_slice(&target[converted..]);
        }
        Ordering::Equal => {}
    }
    layout
}
