//! Contact-card composer.
//!
//! # Responsibility
//! - Map one `ContactRecord` to the full contact-detail display tree.
//! - Own every per-field fallback decision of the screen.
//!
//! # Invariants
//! - Pure and total: no I/O beyond an `Image` request node, no error path,
//!   same record in means same tree out.
//! - The phone row is never omitted; a missing phone shows an em-dash
//!   placeholder. A missing email omits its row entirely. Both policies are
//!   declared below, next to the labels.
//! - The composer holds no sample data; records are injected by callers.

use crate::model::contact::ContactRecord;
use crate::view::node::{
    DisplayNode, HorizontalAlign, Insets, SizeConstraint, TextNode, ADDRESS_VALUE_WIDTH,
    AVATAR_MAX_EDGE, AVATAR_MIN_EDGE, DETAILS_END_PADDING, DETAILS_TOP_PADDING,
    FAMILY_LINE_TOP_PADDING, NAME_LINE_TOP_PADDING, SCREEN_TOP_PADDING,
};
use crate::view::row::{optional_row, policy_row, MissingValuePolicy};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Filled star rendered after the family name of a favorite contact.
pub const FAVORITE_GLYPH: char = '★';
/// Badge label used when both initials sources are empty.
const FALLBACK_BADGE_GLYPH: char = '•';

const PHONE_LABEL: &str = "Phone";
const ADDRESS_LABEL: &str = "Address";
const EMAIL_LABEL: &str = "Email";

/// Missing phone keeps its row and shows a literal em dash.
const PHONE_POLICY: MissingValuePolicy = MissingValuePolicy::Placeholder("—");
/// Missing email drops the whole row, label included.
const EMAIL_POLICY: MissingValuePolicy = MissingValuePolicy::OmitRow;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Composes the full contact-detail screen for one record.
///
/// The returned tree is a centered column: avatar block (image or initials
/// badge plus name lines) above the details block (phone/address/email rows).
pub fn compose_card(contact: &ContactRecord) -> DisplayNode {
    let avatar = avatar_block(contact);
    let details = details_block(contact);

    debug!(
        "event=card_compose module=view status=ok avatar={} favorite={} phone_present={} email_present={}",
        if contact.image_ref.is_some() {
            "image"
        } else {
            "badge"
        },
        contact.is_favorite,
        contact.phone.is_some(),
        contact.email.is_some(),
    );

    DisplayNode::Column {
        align: HorizontalAlign::Center,
        padding: Insets::top(SCREEN_TOP_PADDING),
        children: vec![avatar, details],
    }
}

/// Derives the initials-badge label from the required name fields.
///
/// Takes the first char of each field. Empty fields contribute nothing; when
/// both are empty the badge shows a single generic glyph instead of ending up
/// blank.
pub fn initials(name: &str, family_name: &str) -> String {
    let mut label = String::new();
    label.extend(name.trim().chars().next());
    label.extend(family_name.trim().chars().next());
    if label.is_empty() {
        label.push(FALLBACK_BADGE_GLYPH);
    }
    label
}

/// Avatar block: image or initials badge, then the two name lines.
fn avatar_block(contact: &ContactRecord) -> DisplayNode {
    let avatar = match contact.image_ref.as_deref() {
        Some(url) => DisplayNode::Image {
            url: url.to_string(),
            constraint: SizeConstraint {
                min_edge: AVATAR_MIN_EDGE,
                max_edge: AVATAR_MAX_EDGE,
            },
        },
        None => DisplayNode::Badge {
            label: initials(&contact.name, &contact.family_name),
        },
    };

    DisplayNode::Column {
        align: HorizontalAlign::Center,
        padding: Insets::NONE,
        children: vec![avatar, name_line(contact), family_line(contact)],
    }
}

/// Name line: `name`, then `surname` when present, single-space joined.
fn name_line(contact: &ContactRecord) -> DisplayNode {
    let content = match contact.surname.as_deref() {
        Some(surname) => format!(
            "{} {}",
            display_line(&contact.name),
            display_line(surname)
        ),
        None => display_line(&contact.name),
    };
    let mut text = TextNode::new(content);
    text.padding = Insets::top(NAME_LINE_TOP_PADDING);
    text.into()
}

/// Family-name line; a filled star follows immediately for favorites.
fn family_line(contact: &ContactRecord) -> DisplayNode {
    let mut text = TextNode::new(display_line(&contact.family_name));
    text.padding = Insets::top(FAMILY_LINE_TOP_PADDING);

    let mut children: Vec<DisplayNode> = vec![text.into()];
    if contact.is_favorite {
        children.push(DisplayNode::Icon {
            glyph: FAVORITE_GLYPH,
        });
    }

    DisplayNode::Row {
        padding: Insets::NONE,
        children,
    }
}

/// Details block: phone, address and email rows, top to bottom.
fn details_block(contact: &ContactRecord) -> DisplayNode {
    // A present phone carries the leading plus in its label column; the
    // value column holds the digits as given.
    let phone_row = match contact.phone.as_deref() {
        Some(digits) => optional_row(
            &format!("{PHONE_LABEL}: +"),
            Some(display_line(digits).as_str()),
            None,
        ),
        None => policy_row(&format!("{PHONE_LABEL}: "), None, PHONE_POLICY, None),
    };
    let email_value = contact.email.as_deref().map(display_line);

    let mut children = Vec::new();
    children.extend(phone_row);
    children.extend(optional_row(
        &format!("{ADDRESS_LABEL}: "),
        // Address text passes through verbatim; the width-constrained value
        // column wraps it, line breaks included.
        Some(contact.address.as_str()),
        Some(ADDRESS_VALUE_WIDTH),
    ));
    children.extend(policy_row(
        &format!("{EMAIL_LABEL}: "),
        email_value.as_deref(),
        EMAIL_POLICY,
        None,
    ));

    DisplayNode::Column {
        align: HorizontalAlign::Start,
        padding: Insets {
            top: DETAILS_TOP_PADDING,
            end: DETAILS_END_PADDING,
            ..Insets::NONE
        },
        children,
    }
}

/// Projects raw field text onto a single display line.
///
/// Collapses whitespace runs (including newlines) to single spaces and trims
/// the ends. Identity on already-clean input. Applied to the single-line
/// fields only (name, surname, family name, phone, email); the address is
/// multi-line by nature and reaches its row verbatim.
fn display_line(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw, " ").trim().to_string()
}
