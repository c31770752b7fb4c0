//! Conversion of raw export JSON into the design tree.

use crate::schema::{RawEffect, RawFile, RawNode, RawPaint};
use crate::Result;
use sprig_core::{
    BoundingBox, Color, DesignNode, Effect, EffectKind, NodeKind, Paint, PaintKind, ReadError,
    TextStyle,
};
use std::path::Path;

/// A parsed design document.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignFile {
    /// File name, when the export carries one.
    pub name: Option<String>,
    /// Root of the design tree; `None` for an empty or null document.
    pub document: Option<DesignNode>,
}

/// Parse an export body: either `{ "name": .., "document": {..} }` or a bare
/// node object.
pub fn read_document(json: &str) -> Result<DesignFile> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let object = match &value {
        serde_json::Value::Null => {
            return Ok(DesignFile {
                name: None,
                document: None,
            })
        }
        serde_json::Value::Object(object) => object,
        other => {
            return Err(ReadError::InvalidData(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(other)
            )))
        }
    };

    if object.contains_key("document") {
        let raw: RawFile = serde_json::from_value(value)?;
        let document = raw.document.map(convert_node);
        tracing::debug!(
            name = raw.name.as_deref().unwrap_or(""),
            has_document = document.is_some(),
            "read design file"
        );
        Ok(DesignFile {
            name: raw.name,
            document,
        })
    } else if object.contains_key("type") {
        let node = read_node_value(value)?;
        Ok(DesignFile {
            name: None,
            document: Some(node),
        })
    } else {
        Err(ReadError::InvalidData(
            "object has neither a `document` nor a node `type`".to_string(),
        ))
    }
}

/// Parse a single bare node object.
pub fn read_node(json: &str) -> Result<DesignNode> {
    read_node_value(serde_json::from_str(json)?)
}

/// Read and parse an export from disk.
pub fn read_document_file(path: impl AsRef<Path>) -> Result<DesignFile> {
    let source = std::fs::read_to_string(path.as_ref())?;
    read_document(&source)
}

fn read_node_value(value: serde_json::Value) -> Result<DesignNode> {
    let raw: RawNode = serde_json::from_value(value)?;
    Ok(convert_node(raw))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Map a raw node and its subtree onto [`DesignNode`].
fn convert_node(raw: RawNode) -> DesignNode {
    let fills: Vec<Paint> = raw.fills.iter().filter_map(convert_paint).collect();
    let kind = match raw.node_type.as_str() {
        "FRAME" => NodeKind::Frame,
        "TEXT" => NodeKind::Text {
            characters: raw.characters,
        },
        _ if fills.iter().any(|p| p.kind == PaintKind::Image) => NodeKind::Image,
        other => NodeKind::Other(other.to_string()),
    };

    DesignNode {
        id: raw.id,
        name: raw.name,
        kind,
        children: raw.children.into_iter().map(convert_node).collect(),
        bounding_box: raw.absolute_bounding_box.map(|b| BoundingBox {
            x: b.x,
            y: b.y,
            width: b.width,
            height: b.height,
        }),
        fills,
        effects: raw.effects.iter().filter_map(convert_effect).collect(),
        strokes: raw.strokes.iter().filter_map(convert_paint).collect(),
        stroke_weight: raw.stroke_weight,
        text_style: raw.style.map(|s| TextStyle {
            font_size: s.font_size,
            font_weight: s.font_weight,
        }),
    }
}

/// Map a visible paint; hidden paints are dropped.
fn convert_paint(paint: &RawPaint) -> Option<Paint> {
    if !paint.visible {
        return None;
    }
    let kind = match paint.paint_type.as_str() {
        "SOLID" => PaintKind::Solid,
        "IMAGE" => PaintKind::Image,
        t if t.starts_with("GRADIENT") => PaintKind::Gradient,
        other => PaintKind::Other(other.to_string()),
    };
    Some(Paint {
        kind,
        color: paint.color.map(|c| Color::rgba(c.r, c.g, c.b, c.a)),
        opacity: paint.opacity,
    })
}

/// Map a visible effect; hidden effects are dropped.
fn convert_effect(effect: &RawEffect) -> Option<Effect> {
    if !effect.visible {
        return None;
    }
    let kind = match effect.effect_type.as_str() {
        "DROP_SHADOW" => EffectKind::DropShadow,
        "INNER_SHADOW" => EffectKind::InnerShadow,
        "LAYER_BLUR" => EffectKind::LayerBlur,
        "BACKGROUND_BLUR" => EffectKind::BackgroundBlur,
        other => EffectKind::Other(other.to_string()),
    };
    Some(Effect {
        kind,
        radius: effect.radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FILE: &str = r#"{
        "name": "Landing",
        "document": {
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [{
                "id": "1:1",
                "name": "Navbar",
                "type": "FRAME",
                "absoluteBoundingBox": { "x": 0, "y": 0, "width": 1440, "height": 80 },
                "fills": [
                    { "type": "SOLID", "visible": false, "color": { "r": 1, "g": 0, "b": 0, "a": 1 } },
                    { "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1, "a": 1 } }
                ],
                "effects": [{ "type": "DROP_SHADOW", "radius": 4, "visible": true }],
                "strokes": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0 } }],
                "strokeWeight": 1,
                "children": [{
                    "id": "1:2",
                    "name": "Home",
                    "type": "TEXT",
                    "characters": "Home",
                    "style": { "fontSize": 16, "fontWeight": 500 }
                }, {
                    "id": "1:3",
                    "name": "Logo",
                    "type": "RECTANGLE",
                    "fills": [{ "type": "IMAGE", "imageRef": "abc" }]
                }]
            }]
        }
    }"#;

    #[test]
    fn test_read_file_export() {
        let file = read_document(FILE).unwrap();
        assert_eq!(file.name.as_deref(), Some("Landing"));

        let root = file.document.unwrap();
        assert_eq!(root.kind, NodeKind::Other("DOCUMENT".into()));

        let navbar = &root.children[0];
        assert!(navbar.is_frame());
        assert_eq!(navbar.bounding_box.unwrap().width, 1440.0);
        assert_eq!(navbar.fills.len(), 1, "hidden fill is dropped");
        assert_eq!(navbar.fills[0].solid_color(), Some(Color::WHITE));
        assert_eq!(navbar.effects[0].kind, EffectKind::DropShadow);
        assert_eq!(navbar.stroke_weight, Some(1.0));

        let text = &navbar.children[0];
        assert_eq!(text.characters(), Some("Home"));
        assert_eq!(text.text_style.unwrap().font_weight, Some(500.0));

        assert_eq!(navbar.children[1].kind, NodeKind::Image);
    }

    #[test]
    fn test_null_document_is_empty() {
        let file = read_document(r#"{ "name": "Empty", "document": null }"#).unwrap();
        assert!(file.document.is_none());

        let file = read_document("null").unwrap();
        assert!(file.document.is_none());
    }

    #[test]
    fn test_bare_node() {
        let file = read_document(r#"{ "id": "2:1", "name": "Hero", "type": "FRAME" }"#).unwrap();
        assert!(file.document.unwrap().is_frame());

        let node = read_node(r#"{ "id": "2:2", "type": "TEXT", "characters": "Hi" }"#).unwrap();
        assert_eq!(node.characters(), Some("Hi"));
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(matches!(
            read_document("[1, 2]"),
            Err(ReadError::InvalidData(_))
        ));
        assert!(matches!(
            read_document(r#"{ "foo": 1 }"#),
            Err(ReadError::InvalidData(_))
        ));
        assert!(matches!(read_document("{"), Err(ReadError::Json(_))));
    }

    #[test]
    fn test_read_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FILE.as_bytes()).unwrap();

        let design = read_document_file(file.path()).unwrap();
        assert!(design.document.is_some());
        assert!(matches!(
            read_document_file(file.path().with_extension("missing")),
            Err(ReadError::Io(_))
        ));
    }
}
