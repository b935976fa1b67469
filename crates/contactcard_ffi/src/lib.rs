//! FFI surface of the contact-card composer for declarative-UI hosts.

pub mod api;
