//! Depth-first traversal over the design tree.

use sprig_core::DesignNode;

/// Collect every frame under `root` (including `root` itself), depth-first
/// pre-order. Children of non-frame nodes are still visited.
pub fn flatten_frames(root: Option<&DesignNode>) -> Vec<&DesignNode> {
    let mut frames = Vec::new();
    if let Some(node) = root {
        push_frames(node, &mut frames);
    }
    frames
}

fn push_frames<'a>(node: &'a DesignNode, frames: &mut Vec<&'a DesignNode>) {
    if node.is_frame() {
        frames.push(node);
    }
    for child in &node.children {
        push_frames(child, frames);
    }
}

/// Collect the trimmed, non-empty text lines of every text node under `node`
/// (including `node` itself), depth-first pre-order.
pub fn collect_text(node: Option<&DesignNode>) -> Vec<String> {
    let mut texts = Vec::new();
    if let Some(node) = node {
        push_text(node, &mut texts);
    }
    texts
}

fn push_text(node: &DesignNode, texts: &mut Vec<String>) {
    if let Some(characters) = node.characters() {
        texts.extend(
            characters
                .split(is_line_break)
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }
    for child in &node.children {
        push_text(child, texts);
    }
}

/// Design tools emit `\u{2028}` for soft line breaks besides `\n`.
fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
