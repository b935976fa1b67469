use contactcard_core::view::node::{Insets, ROW_BOTTOM_PADDING, ROW_GAP_WIDTH, ROW_LABEL_WIDTH};
use contactcard_core::{optional_row, policy_row, DisplayNode, FontStyle, MissingValuePolicy, TextAlign};

#[test]
fn present_value_builds_fixed_geometry_row() {
    let row = optional_row("Phone: ", Some("+123"), None).expect("row should exist");

    let DisplayNode::Row { padding, children } = row else {
        panic!("expected row node");
    };
    assert_eq!(padding, Insets::bottom(ROW_BOTTOM_PADDING));
    assert_eq!(children.len(), 3);

    let DisplayNode::Text(label) = &children[0] else {
        panic!("expected label text");
    };
    assert_eq!(label.content, "Phone: ");
    assert_eq!(label.style, FontStyle::Italic);
    assert_eq!(label.align, TextAlign::End);
    assert_eq!(label.width, Some(ROW_LABEL_WIDTH));

    assert_eq!(
        children[1],
        DisplayNode::Spacer {
            width: ROW_GAP_WIDTH
        }
    );

    let DisplayNode::Text(value) = &children[2] else {
        panic!("expected value text");
    };
    assert_eq!(value.content, "+123");
    assert_eq!(value.style, FontStyle::Regular);
    assert_eq!(value.align, TextAlign::Start);
    assert_eq!(value.width, None);
}

#[test]
fn value_width_constrains_only_the_value_column() {
    let row = optional_row("Address: ", Some("Addr"), Some(180)).expect("row should exist");
    let DisplayNode::Row { children, .. } = row else {
        panic!("expected row node");
    };

    let DisplayNode::Text(label) = &children[0] else {
        panic!("expected label text");
    };
    let DisplayNode::Text(value) = &children[2] else {
        panic!("expected value text");
    };
    assert_eq!(label.width, Some(ROW_LABEL_WIDTH));
    assert_eq!(value.width, Some(180));
}

#[test]
fn absent_value_leaks_no_label() {
    assert_eq!(optional_row("Email: ", None, None), None);
}

#[test]
fn placeholder_policy_keeps_the_row() {
    let row = policy_row(
        "Phone: ",
        None,
        MissingValuePolicy::Placeholder("—"),
        None,
    )
    .expect("placeholder policy keeps the row");

    let DisplayNode::Row { children, .. } = row else {
        panic!("expected row node");
    };
    let DisplayNode::Text(value) = &children[2] else {
        panic!("expected value text");
    };
    assert_eq!(value.content, "—");
}

#[test]
fn omit_policy_drops_the_row() {
    assert_eq!(
        policy_row("Email: ", None, MissingValuePolicy::OmitRow, None),
        None
    );
}
