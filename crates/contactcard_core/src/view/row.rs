//! Shared info-row primitive.
//!
//! # Responsibility
//! - Build the two-column label/value row used by the details block.
//! - Make the missing-value policy of each row an explicit declaration.
//!
//! # Invariants
//! - An absent value emits nothing: no label, no spacer, zero height.
//! - Row geometry is fixed: italic end-aligned label of width 80, gap of 8,
//!   start-aligned value, bottom padding 12.

use crate::view::node::{
    DisplayNode, FontStyle, Insets, TextAlign, TextNode, Units, ROW_BOTTOM_PADDING, ROW_GAP_WIDTH,
    ROW_LABEL_WIDTH,
};
use std::borrow::Cow;

/// What a row does when its value is absent.
///
/// Declared per field next to the row labels, so the difference between a
/// kept-with-placeholder row and a fully omitted row is a visible decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingValuePolicy {
    /// Drop the entire row, label included.
    OmitRow,
    /// Keep the row and show this literal in the value column.
    Placeholder(&'static str),
}

impl MissingValuePolicy {
    /// Applies the policy to an optional value.
    ///
    /// Present values pass through unchanged under either policy.
    pub fn resolve<'a>(&self, value: Option<&'a str>) -> Option<Cow<'a, str>> {
        match (self, value) {
            (_, Some(present)) => Some(Cow::Borrowed(present)),
            (Self::Placeholder(literal), None) => Some(Cow::Borrowed(literal)),
            (Self::OmitRow, None) => None,
        }
    }
}

/// Builds one label/value row, or nothing when the value is absent.
///
/// This is the primitive whose null-handling produces the screen's row
/// asymmetry: callers that want a kept row substitute a placeholder before
/// calling, callers that want omission pass the raw optional through.
pub fn optional_row(
    label: &str,
    value: Option<&str>,
    value_width: Option<Units>,
) -> Option<DisplayNode> {
    let value = value?;

    let label_node = TextNode {
        content: label.to_string(),
        style: FontStyle::Italic,
        align: TextAlign::End,
        width: Some(ROW_LABEL_WIDTH),
        padding: Insets::NONE,
    };
    let value_node = TextNode {
        content: value.to_string(),
        style: FontStyle::Regular,
        align: TextAlign::Start,
        width: value_width,
        padding: Insets::NONE,
    };

    Some(DisplayNode::Row {
        padding: Insets::bottom(ROW_BOTTOM_PADDING),
        children: vec![
            label_node.into(),
            DisplayNode::Spacer {
                width: ROW_GAP_WIDTH,
            },
            value_node.into(),
        ],
    })
}

/// Builds one row after applying a missing-value policy.
pub fn policy_row(
    label: &str,
    value: Option<&str>,
    policy: MissingValuePolicy,
    value_width: Option<Units>,
) -> Option<DisplayNode> {
    let resolved = policy.resolve(value);
    optional_row(label, resolved.as_deref(), value_width)
}
