//! Structural and textual analysis of the design tree.

mod classifier;
mod style;
mod walker;

pub use classifier::{Classification, ClassificationSource, Classifier};
pub use style::extract_style;
pub use walker::{collect_text, flatten_frames};

use crate::model::ExtractedFrame;
use sprig_core::DesignNode;

/// Extract every frame of the tree, in depth-first pre-order.
pub fn extract_frames(root: Option<&DesignNode>) -> Vec<ExtractedFrame> {
    flatten_frames(root)
        .into_iter()
        .map(extract_frame)
        .collect()
}

/// Extract the texts, child-frame flag, and style tokens of one frame.
pub fn extract_frame(frame: &DesignNode) -> ExtractedFrame {
    ExtractedFrame {
        id: frame.id.clone(),
        source_name: frame.name.clone(),
        texts: collect_text(Some(frame)),
        has_child_frames: frame.has_child_frames(),
        bounding_box: frame.bounding_box,
        style: extract_style(frame),
    }
}
