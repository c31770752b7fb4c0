//! Style-token extraction from a node's raw visual attributes.

use sprig_core::{DesignNode, EffectKind, FontSize, FontWeight, StyleTokens};

/// Map a node's fills, effects, strokes, and font metrics onto style tokens.
///
/// Each token is extracted independently; absent attributes leave the token
/// unset.
pub fn extract_style(node: &DesignNode) -> StyleTokens {
    let text_style = node.text_style.unwrap_or_default();
    StyleTokens {
        background: node.fills.iter().find_map(|paint| paint.solid_color()),
        elevated: node
            .effects
            .iter()
            .any(|effect| effect.kind == EffectKind::DropShadow),
        border: border_weight(node),
        font_size: text_style.font_size.map(FontSize::from_px),
        font_weight: text_style.font_weight.map(FontWeight::from_numeric),
    }
}

/// The stroke weight, when the node has a stroke and the weight is positive.
fn border_weight(node: &DesignNode) -> Option<f64> {
    if node.strokes.is_empty() {
        return None;
    }
    node.stroke_weight.filter(|weight| *weight > 0.0)
}
