//! Core composition logic for ContactCard.
//! This crate is the single source of truth for contact display rules.

pub mod logging;
pub mod model;
pub mod render;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{ContactRecord, ContactValidationError};
pub use render::fetch::{BlankFetcher, ImageData, ImageFetcher};
pub use render::text::render_to_text;
pub use view::compose::{compose_card, initials, FAVORITE_GLYPH};
pub use view::node::{
    DisplayNode, FontStyle, HorizontalAlign, Insets, SizeConstraint, TextAlign, TextNode, Units,
};
pub use view::row::{optional_row, policy_row, MissingValuePolicy};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
