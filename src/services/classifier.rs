//! Keyboard family detection from the shape of layer 0.

use serde_json::Value;

use crate::models::{Geometry, KeyboardKind, Layer, VilConfig};

/// Classifies a configuration by its first layer.
#[must_use]
pub fn classify(config: &VilConfig) -> KeyboardKind {
    classify_layout(config.layout())
}

/// Classifies a bare layout.
///
/// `Wired` iff layer 0 has exactly 4 rows of 12 cells, `Wireless` iff it has
/// exactly 8 rows of 7 cells. Anything else, including an empty layout, is
/// `Unknown`. Only layer 0 is inspected.
#[must_use]
pub fn classify_layout(layout: &[Layer]) -> KeyboardKind {
    let Some(first) = layout.first() else {
        return KeyboardKind::Unknown;
    };

    Geometry::ALL
        .into_iter()
        .find(|&geometry| has_shape(first, geometry))
        .map_or(KeyboardKind::Unknown, KeyboardKind::from)
}

fn has_shape(layer: &[Vec<Value>], geometry: Geometry) -> bool {
    layer.len() == geometry.rows() && layer.iter().all(|row| row.len() == geometry.cols())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn matrix(rows: usize, cols: usize) -> Layer {
        vec![vec![json!("KC_NO"); cols]; rows]
    }

    #[test]
    fn test_classify_wired() {
        assert_eq!(classify_layout(&[matrix(4, 12)]), KeyboardKind::Wired);
    }

    #[test]
    fn test_classify_wireless() {
        assert_eq!(classify_layout(&[matrix(8, 7)]), KeyboardKind::Wireless);
    }

    #[test]
    fn test_classify_empty_layout() {
        assert_eq!(classify_layout(&[]), KeyboardKind::Unknown);
    }

    #[test]
    fn test_classify_other_shapes() {
        assert_eq!(classify_layout(&[matrix(12, 4)]), KeyboardKind::Unknown);
        assert_eq!(classify_layout(&[matrix(7, 8)]), KeyboardKind::Unknown);
        assert_eq!(classify_layout(&[matrix(4, 7)]), KeyboardKind::Unknown);
        assert_eq!(classify_layout(&[matrix(0, 0)]), KeyboardKind::Unknown);
    }

    #[test]
    fn test_classify_ragged_row() {
        let mut layer = matrix(4, 12);
        layer[2].push(Value::Null);
        assert_eq!(classify_layout(&[layer]), KeyboardKind::Unknown);

        let mut layer = matrix(8, 7);
        layer[7].pop();
        assert_eq!(classify_layout(&[layer]), KeyboardKind::Unknown);
    }

    #[test]
    fn test_classify_only_looks_at_layer_zero() {
        let layout = vec![matrix(8, 7), matrix(4, 12), matrix(1, 1)];
        assert_eq!(classify_layout(&layout), KeyboardKind::Wireless);
    }

    #[test]
    fn test_classify_config() {
        let config = VilConfig::from_value(json!({"layout": [matrix(4, 12)]})).unwrap();
        assert_eq!(classify(&config), KeyboardKind::Wired);
    }
}
