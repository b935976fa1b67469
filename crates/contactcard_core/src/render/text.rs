//! Plain-text reference renderer.
//!
//! # Responsibility
//! - Project a display tree onto deterministic text, one line per block.
//! - Delegate `Image` nodes to the provided fetcher.
//!
//! # Invariants
//! - Column children stack as separate lines; row children concatenate
//!   inline with no injected separators.
//! - Spacers are geometric only and contribute nothing to text output.
//! - A declined image fetch produces no line at all (blank region).

use crate::render::fetch::ImageFetcher;
use crate::view::node::DisplayNode;

/// Renders a display tree to plain text.
///
/// Used by the CLI probe and by tests as the reference projection of the
/// composer's output; real hosts walk the tree with their own drawing
/// primitives instead.
pub fn render_to_text(node: &DisplayNode, fetcher: &dyn ImageFetcher) -> String {
    let mut lines = Vec::new();
    collect_lines(node, fetcher, &mut lines);
    lines.join("\n")
}

fn collect_lines(node: &DisplayNode, fetcher: &dyn ImageFetcher, lines: &mut Vec<String>) {
    match node {
        DisplayNode::Column { children, .. } => {
            for child in children {
                collect_lines(child, fetcher, lines);
            }
        }
        other => {
            let line = inline_text(other, fetcher);
            if !line.is_empty() {
                lines.push(line);
            }
        }
    }
}

fn inline_text(node: &DisplayNode, fetcher: &dyn ImageFetcher) -> String {
    match node {
        DisplayNode::Row { children, .. } | DisplayNode::Column { children, .. } => children
            .iter()
            .map(|child| inline_text(child, fetcher))
            .collect(),
        DisplayNode::Text(text) => text.content.clone(),
        DisplayNode::Badge { label } => label.clone(),
        DisplayNode::Icon { glyph } => glyph.to_string(),
        DisplayNode::Spacer { .. } => String::new(),
        DisplayNode::Image { url, constraint } => fetcher
            .fetch(url, *constraint)
            .map(|image| format!("[image {}x{}]", image.width, image.height))
            .unwrap_or_default(),
    }
}
