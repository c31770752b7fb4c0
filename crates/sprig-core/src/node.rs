//! The design tree consumed by the compiler.

use crate::types::{BoundingBox, Effect, Paint, TextStyle};
use serde::{Deserialize, Serialize};

/// Kind of a design node, with the data only that kind carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Structural container, candidate for becoming one component.
    Frame,
    /// Leaf carrying literal display text.
    Text { characters: Option<String> },
    /// Node whose content is a raster image.
    Image,
    /// Any other node; keeps the exporter's type label.
    Other(String),
}

/// A node in the source design tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignNode {
    /// Unique within one document.
    pub id: String,
    /// Author-supplied label.
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<DesignNode>,
    pub bounding_box: Option<BoundingBox>,
    pub fills: Vec<Paint>,
    pub effects: Vec<Effect>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    pub text_style: Option<TextStyle>,
}

impl DesignNode {
    /// Create a node of the given kind with no children or styling.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
            bounding_box: None,
            fills: Vec::new(),
            effects: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: None,
            text_style: None,
        }
    }

    pub fn frame(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Frame)
    }

    /// Create a text node whose name mirrors its content.
    pub fn text(id: impl Into<String>, characters: impl Into<String>) -> Self {
        let characters = characters.into();
        Self::new(
            id,
            characters.clone(),
            NodeKind::Text {
                characters: Some(characters),
            },
        )
    }

    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = DesignNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.bounding_box = Some(BoundingBox::new(width, height));
        self
    }

    pub fn is_frame(&self) -> bool {
        matches!(self.kind, NodeKind::Frame)
    }

    /// The text content, for text nodes.
    pub fn characters(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { characters } => characters.as_deref(),
            _ => None,
        }
    }

    /// Whether any direct child is a frame.
    pub fn has_child_frames(&self) -> bool {
        self.children.iter().any(DesignNode::is_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let node = DesignNode::frame("1:1", "Navbar")
            .with_size(1440.0, 80.0)
            .with_child(DesignNode::text("1:2", "Home"));

        assert!(node.is_frame());
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].characters(), Some("Home"));
        assert_eq!(node.bounding_box.unwrap().area(), 115_200.0);
    }

    #[test]
    fn test_has_child_frames_only_looks_at_direct_children() {
        let nested = DesignNode::new("1", "Group", NodeKind::Other("GROUP".into()))
            .with_child(DesignNode::frame("2", "Inner"));
        let outer = DesignNode::frame("0", "Outer").with_child(nested);
        assert!(!outer.has_child_frames());

        let direct = DesignNode::frame("0", "Outer").with_child(DesignNode::frame("3", "Inner"));
        assert!(direct.has_child_frames());
    }

    #[test]
    fn test_characters_only_for_text() {
        assert_eq!(DesignNode::frame("1", "Frame").characters(), None);
        let empty = DesignNode::new("2", "t", NodeKind::Text { characters: None });
        assert_eq!(empty.characters(), None);
    }
}
