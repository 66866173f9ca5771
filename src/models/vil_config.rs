//! Vial configuration document (`.vil`).

use serde_json::{Map, Value};
use thiserror::Error;

/// One keymap layer: rows of opaque key cells.
///
/// Cells are kept as raw JSON values (keycode strings, numbers or nested
/// structures) and are only ever moved, never interpreted.
pub type Layer = Vec<Vec<Value>>;

/// All layers of a configuration, layer 0 first.
pub type Layout = Vec<Layer>;

/// Name of the document field that holds the keymap.
pub const LAYOUT_FIELD: &str = "layout";

/// Reasons a JSON value is not a usable Vial document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Text is not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level value is not an object
    #[error("expected a JSON object at the top level")]
    NotAnObject,

    /// The `layout` field is not an array of matrices
    #[error("`layout` must be an array of layers, each an array of rows: {0}")]
    InvalidLayout(serde_json::Error),
}

/// A loaded `.vil` document.
///
/// The full object is kept in field order (`preserve_order`), so every field
/// besides `layout` (version, uid, macros, tap dance, combos, key overrides,
/// settings and anything unknown) is written back untouched and in place.
/// The decoded layout is held alongside and kept in sync by
/// [`VilConfig::set_layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct VilConfig {
    document: Map<String, Value>,
    layout: Layout,
}

impl VilConfig {
    /// Wraps a parsed JSON value.
    ///
    /// A missing or `null` layout decodes as an empty layout, which later
    /// classifies as unknown. A `null` layer or row decodes as empty too.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let Value::Object(document) = value else {
            return Err(DocumentError::NotAnObject);
        };

        let layout = match document.get(LAYOUT_FIELD) {
            None | Some(Value::Null) => Layout::new(),
            Some(raw) => decode_layout(raw)?,
        };

        Ok(Self { document, layout })
    }

    /// The decoded keymap layers.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of keymap layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layout.len()
    }

    /// Replaces the keymap, keeping the field's position in the document.
    pub fn set_layout(&mut self, layout: Layout) {
        self.document
            .insert(LAYOUT_FIELD.to_string(), layout_to_value(&layout));
        self.layout = layout;
    }

    /// Returns a copy with the keymap replaced.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.set_layout(layout);
        self
    }

    /// Top-level field names in document order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.document.keys().map(String::as_str)
    }

    /// The whole document.
    #[must_use]
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }
}

fn decode_layout(raw: &Value) -> Result<Layout, DocumentError> {
    let layers: Vec<Option<Vec<Option<Vec<Value>>>>> =
        serde_json::from_value(raw.clone()).map_err(DocumentError::InvalidLayout)?;

    Ok(layers
        .into_iter()
        .map(|layer| {
            layer
                .unwrap_or_default()
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect()
        })
        .collect())
}

fn layout_to_value(layout: &Layout) -> Value {
    Value::Array(
        layout
            .iter()
            .map(|layer| Value::Array(layer.iter().cloned().map(Value::Array).collect()))
            .collect(),
    )
}
