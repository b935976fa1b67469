//! FFI use-case API for UI-host-facing calls.
//!
//! # Responsibility
//! - Expose the composer to a declarative-UI host via FRB.
//! - Keep error semantics simple: response envelopes, never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Contacts cross the boundary as JSON and are validated on decode; the
//!   display tree crosses back as canonical JSON for the host renderer.

use contactcard_core::{
    compose_card, core_version as core_version_inner, init_logging as init_logging_inner,
    render_to_text, BlankFetcher, ContactRecord,
};

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Response envelope for card composition calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardComposeResponse {
    /// Whether composition succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Display tree as canonical JSON, present on success.
    pub tree_json: Option<String>,
}

/// Response envelope for plain-text preview calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTextResponse {
    /// Whether rendering succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Rendered preview text, empty on failure.
    pub text: String,
}

/// Composes the contact-detail display tree for one contact.
///
/// `contact_json` is a JSON object with the contact wire fields (`name`,
/// `surname?`, `family_name`, `image_ref?`, `is_favorite?`, `phone?`,
/// `address`, `email?`). Required fields are validated on decode.
///
/// # FFI contract
/// - Sync call, CPU-only, no I/O.
/// - Never panics.
/// - Returns the display tree as JSON for the host renderer; `Image` nodes
///   are requests the host's image fetcher resolves.
#[flutter_rust_bridge::frb(sync)]
pub fn card_compose(contact_json: String) -> CardComposeResponse {
    let contact = match decode_contact(&contact_json) {
        Ok(contact) => contact,
        Err(message) => {
            return CardComposeResponse {
                ok: false,
                message,
                tree_json: None,
            };
        }
    };

    let card = compose_card(&contact);
    match serde_json::to_string(&card) {
        Ok(tree_json) => CardComposeResponse {
            ok: true,
            message: "Card composed.".to_string(),
            tree_json: Some(tree_json),
        },
        Err(err) => CardComposeResponse {
            ok: false,
            message: format!("card_compose failed: {err}"),
            tree_json: None,
        },
    }
}

/// Renders a plain-text preview of the contact card.
///
/// Uses the reference text renderer with a blank image fetcher, so avatar
/// regions with an `image_ref` render empty here.
///
/// # FFI contract
/// - Sync call, CPU-only, no I/O.
/// - Never panics.
/// - Returns deterministic text for the same contact input.
#[flutter_rust_bridge::frb(sync)]
pub fn card_preview_text(contact_json: String) -> CardTextResponse {
    match decode_contact(&contact_json) {
        Ok(contact) => CardTextResponse {
            ok: true,
            message: "Preview rendered.".to_string(),
            text: render_to_text(&compose_card(&contact), &BlankFetcher),
        },
        Err(message) => CardTextResponse {
            ok: false,
            message,
            text: String::new(),
        },
    }
}

fn decode_contact(contact_json: &str) -> Result<ContactRecord, String> {
    serde_json::from_str(contact_json).map_err(|err| format!("invalid contact: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{card_compose, card_preview_text, core_version, init_logging};

    fn minimal_contact_json() -> String {
        r#"{"name":"Alex","family_name":"Lexov","address":"Addr","is_favorite":true}"#.to_string()
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn card_compose_returns_tree_json() {
        let response = card_compose(minimal_contact_json());
        assert!(response.ok, "{}", response.message);
        let tree_json = response.tree_json.expect("tree should be present");
        assert!(tree_json.contains("Badge"));
        assert!(tree_json.contains("AL"));
    }

    #[test]
    fn card_compose_rejects_invalid_contact() {
        let response = card_compose(r#"{"name":"","family_name":"L","address":"A"}"#.to_string());
        assert!(!response.ok);
        assert!(response.message.contains("name"));
        assert_eq!(response.tree_json, None);
    }

    #[test]
    fn card_preview_text_is_deterministic() {
        let first = card_preview_text(minimal_contact_json());
        let second = card_preview_text(minimal_contact_json());
        assert!(first.ok, "{}", first.message);
        assert_eq!(first.text, second.text);
        assert_eq!(first.text, "AL\nAlex\nLexov★\nPhone: —\nAddress: Addr");
    }
}
