//! Capability domain module
//!
//! A capability is one external extraction operation (read text from an
//! image, scrape matching elements from a page) configured with the
//! parameters of the current invocation.

pub mod entities;

pub use entities::{CapabilityBinding, CapabilityKind};
