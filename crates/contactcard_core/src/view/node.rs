//! Display-node vocabulary.
//!
//! # Responsibility
//! - Define the tree shape the composer emits and hosts render.
//! - Hold the fixed layout metrics of the contact-detail screen.
//!
//! # Invariants
//! - Nodes are plain data: no callbacks, no host handles, serde-friendly so a
//!   host can consume the tree as JSON across a process boundary.
//! - `Image` nodes are requests, not pixels; resolving the URL is the host
//!   image fetcher's job.

use serde::{Deserialize, Serialize};

/// Logical display unit (density-independent on real hosts).
pub type Units = u16;

/// Top padding of the whole screen column.
pub const SCREEN_TOP_PADDING: Units = 16;
/// Minimum edge of the avatar frame.
pub const AVATAR_MIN_EDGE: Units = 24;
/// Maximum edge of the avatar frame.
pub const AVATAR_MAX_EDGE: Units = 120;
/// Top padding of the name line under the avatar.
pub const NAME_LINE_TOP_PADDING: Units = 8;
/// Top padding of the family-name line.
pub const FAMILY_LINE_TOP_PADDING: Units = 4;
/// Top padding of the details block.
pub const DETAILS_TOP_PADDING: Units = 34;
/// End padding of the details block.
pub const DETAILS_END_PADDING: Units = 24;
/// Bottom padding of each info row.
pub const ROW_BOTTOM_PADDING: Units = 12;
/// Fixed width of the info-row label column.
pub const ROW_LABEL_WIDTH: Units = 80;
/// Gap between an info-row label and its value.
pub const ROW_GAP_WIDTH: Units = 8;
/// Fixed value-column width of the address row, forcing wrap.
pub const ADDRESS_VALUE_WIDTH: Units = 180;

/// Edge insets in logical units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub top: Units,
    pub bottom: Units,
    pub start: Units,
    pub end: Units,
}

impl Insets {
    /// Zero insets.
    pub const NONE: Insets = Insets {
        top: 0,
        bottom: 0,
        start: 0,
        end: 0,
    };

    /// Top-only insets.
    pub const fn top(units: Units) -> Self {
        Insets {
            top: units,
            bottom: 0,
            start: 0,
            end: 0,
        }
    }

    /// Bottom-only insets.
    pub const fn bottom(units: Units) -> Self {
        Insets {
            top: 0,
            bottom: units,
            start: 0,
            end: 0,
        }
    }
}

/// Child alignment inside a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlign {
    Start,
    Center,
}

/// Text alignment inside its own box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Start,
    End,
}

/// Font style of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Regular,
    Italic,
}

/// Size constraint for an avatar image frame, in logical units per edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeConstraint {
    pub min_edge: Units,
    pub max_edge: Units,
}

/// Styled text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub content: String,
    pub style: FontStyle,
    pub align: TextAlign,
    /// Fixed box width; `None` means intrinsic width.
    pub width: Option<Units>,
    pub padding: Insets,
}

impl TextNode {
    /// Plain start-aligned text with intrinsic width and no padding.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: FontStyle::Regular,
            align: TextAlign::Start,
            width: None,
            padding: Insets::NONE,
        }
    }
}

/// One element of the display tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayNode {
    /// Vertical container.
    Column {
        align: HorizontalAlign,
        padding: Insets,
        children: Vec<DisplayNode>,
    },
    /// Horizontal container; children flow inline.
    Row {
        padding: Insets,
        children: Vec<DisplayNode>,
    },
    /// Text leaf.
    Text(TextNode),
    /// Avatar image request for the host image fetcher.
    Image {
        url: String,
        constraint: SizeConstraint,
    },
    /// Circular initials placeholder shown when no image is requested.
    Badge { label: String },
    /// Single-glyph icon (favorite star).
    Icon { glyph: char },
    /// Horizontal gap; purely geometric.
    Spacer { width: Units },
}

impl From<TextNode> for DisplayNode {
    fn from(value: TextNode) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayNode, Insets, TextNode};

    #[test]
    fn insets_helpers_touch_one_edge() {
        assert_eq!(Insets::top(16).top, 16);
        assert_eq!(Insets::top(16).bottom, 0);
        assert_eq!(Insets::bottom(12).bottom, 12);
        assert_eq!(Insets::bottom(12).end, 0);
    }

    #[test]
    fn text_node_converts_into_display_node() {
        let node: DisplayNode = TextNode::new("hello").into();
        match node {
            DisplayNode::Text(text) => assert_eq!(text.content, "hello"),
            other => panic!("expected text node, got {other:?}"),
        }
    }
}
