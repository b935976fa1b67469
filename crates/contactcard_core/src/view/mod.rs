//! Display composition for the contact-detail screen.
//!
//! # Responsibility
//! - Define the declarative display-node vocabulary hosts consume.
//! - Map one `ContactRecord` to one display tree, deterministically.
//!
//! # Invariants
//! - Composition is a pure, total mapping: every combination of present and
//!   absent optional fields yields a valid tree, no error path.
//! - Per-field fallback policy (placeholder vs row omission) is declared
//!   explicitly where the rows are built, never inferred from nullability.

pub mod compose;
pub mod node;
pub mod row;
