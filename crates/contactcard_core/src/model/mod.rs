//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record consumed by the display composer.
//! - Keep required/optional field semantics explicit in the type shape.
//!
//! # Invariants
//! - Required text fields (`name`, `family_name`, `address`) are non-empty.
//! - Records are value objects: equality by value, no identity, no mutation
//!   after they reach the composer.

pub mod contact;
