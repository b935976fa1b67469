//! Host-facing rendering seams.
//!
//! # Responsibility
//! - Express the external collaborator contracts (image fetcher, rendering
//!   host) as traits the composer's output can be driven through.
//! - Ship one reference renderer: a deterministic plain-text projection used
//!   by the CLI probe and by tests.
//!
//! # Invariants
//! - The composer never calls a fetcher; only renderers resolve `Image`
//!   nodes, and a declined fetch leaves the region blank with no error.

pub mod fetch;
pub mod text;
