//! Capability Provider port
//!
//! Defines the interface for the underlying extraction tools: "given a
//! configured binding, produce extracted text". Providers may perform
//! network or filesystem access and may fail with provider-specific
//! errors; the application layer treats them as opaque.

use async_trait::async_trait;
use crewrun_domain::{CapabilityBinding, CapabilityKind};
use thiserror::Error;

/// Errors that can occur inside a capability provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP error: {0}")]
    HttpStatus(String),

    #[error("No content extracted: {0}")]
    NothingExtracted(String),

    #[error("Endpoint error: {0}")]
    Endpoint(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for one extraction capability
///
/// A provider serves exactly one [`CapabilityKind`]; the runtime routes
/// each task to the provider whose kind matches the agent's binding.
#[async_trait]
pub trait CapabilityProvider: Send + Sync {
    /// The capability this provider serves
    fn kind(&self) -> CapabilityKind;

    /// Resolve the bound resource and produce extracted text.
    ///
    /// This is where resource access actually happens; bindings are
    /// constructed without side effects and resolved lazily here.
    async fn extract(&self, binding: &CapabilityBinding) -> Result<String, ProviderError>;
}
