//! JSON shapes of a design-tool file export.
//!
//! Only the fields the compiler reads are modelled; everything else in the
//! export is ignored.

use serde::Deserialize;

/// Body of a file export.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFile {
    #[serde(default)]
    pub name: Option<String>,
    /// The document root. `null` or missing means an empty design.
    #[serde(default)]
    pub document: Option<RawNode>,
}

/// A node in the export.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default)]
    pub children: Vec<RawNode>,
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub absolute_bounding_box: Option<RawBoundingBox>,
    #[serde(default)]
    pub fills: Vec<RawPaint>,
    #[serde(default)]
    pub strokes: Vec<RawPaint>,
    #[serde(default)]
    pub stroke_weight: Option<f64>,
    #[serde(default)]
    pub effects: Vec<RawEffect>,
    #[serde(default)]
    pub style: Option<RawTypeStyle>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawBoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPaint {
    #[serde(rename = "type")]
    pub paint_type: String,
    #[serde(default = "visible")]
    pub visible: bool,
    #[serde(default)]
    pub opacity: Option<f32>,
    #[serde(default)]
    pub color: Option<RawColor>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEffect {
    #[serde(rename = "type")]
    pub effect_type: String,
    #[serde(default = "visible")]
    pub visible: bool,
    #[serde(default)]
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTypeStyle {
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_weight: Option<f64>,
}

fn visible() -> bool {
    true
}

fn opaque() -> f32 {
    1.0
}
