//! Capability domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Kind of extraction capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    /// Read all legible text from an image (path or URL)
    VisionExtract,
    /// Extract the text of elements matching a CSS selector from a page
    ScrapeElements,
}

impl CapabilityKind {
    pub fn as_str(&self) -> &str {
        match self {
            CapabilityKind::VisionExtract => "vision_extract",
            CapabilityKind::ScrapeElements => "scrape_elements",
        }
    }
}

impl std::fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configured handle to one external capability.
///
/// Construction is side-effect-free: no network or filesystem access
/// happens at bind time. Resource access is deferred to the provider
/// that executes the bound capability. Parameters are carried exactly
/// as supplied, with no trimming or encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityBinding {
    /// Which capability this binding configures
    pub kind: CapabilityKind,
    /// Resource locator (file path or URL)
    pub locator: String,
    /// CSS selector expression (scrape_elements only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

impl CapabilityBinding {
    /// Bind the vision capability to an image locator.
    pub fn vision(locator: impl Into<String>) -> Result<Self, DomainError> {
        let locator = locator.into();
        if locator.is_empty() {
            return Err(DomainError::InvalidBinding(
                "locator must not be empty".to_string(),
            ));
        }
        Ok(Self {
            kind: CapabilityKind::VisionExtract,
            locator,
            selector: None,
        })
    }

    /// Bind the scrape capability to a page locator and a CSS selector.
    pub fn scrape(
        locator: impl Into<String>,
        selector: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let locator = locator.into();
        let selector = selector.into();
        if locator.is_empty() {
            return Err(DomainError::InvalidBinding(
                "locator must not be empty".to_string(),
            ));
        }
        if selector.is_empty() {
            return Err(DomainError::InvalidBinding(
                "selector must not be empty".to_string(),
            ));
        }
        Ok(Self {
            kind: CapabilityKind::ScrapeElements,
            locator,
            selector: Some(selector),
        })
    }

    /// The selector expression, if this binding carries one
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }
}
