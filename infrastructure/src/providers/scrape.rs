//! Scrape provider: fetch a page and extract elements matching a CSS selector

use async_trait::async_trait;
use crewrun_application::ports::capability_provider::{CapabilityProvider, ProviderError};
use crewrun_domain::{CapabilityBinding, CapabilityKind};
use scraper::{Html, Selector};
use tracing::debug;

/// Maximum response body size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Provider for the `scrape_elements` capability.
///
/// Fetches the page at the bound locator and returns the text of all
/// elements matching the bound selector, one block per element.
pub struct ScrapeProvider {
    client: reqwest::Client,
}

impl ScrapeProvider {
    pub fn new() -> Self {
        Self {
            client: super::http_client(),
        }
    }
}

impl Default for ScrapeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CapabilityProvider for ScrapeProvider {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::ScrapeElements
    }

    async fn extract(&self, binding: &CapabilityBinding) -> Result<String, ProviderError> {
        let selector = binding.selector().ok_or_else(|| {
            ProviderError::InvalidSelector("binding carries no selector".to_string())
        })?;

        debug!(url = %binding.locator, selector, "Fetching page for selector extraction");

        let response = self
            .client
            .get(&binding.locator)
            .header("User-Agent", super::USER_AGENT)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to fetch URL: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::HttpStatus(format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to read body: {}", e)))?;
        if body.len() > MAX_BODY_SIZE {
            return Err(ProviderError::RequestFailed(format!(
                "Response too large: {} bytes (max: {} bytes)",
                body.len(),
                MAX_BODY_SIZE
            )));
        }

        let html = String::from_utf8_lossy(&body);
        extract_elements(&html, selector)
    }
}

/// Extract the text of all elements matching `selector`, one block per
/// element, separated by newlines.
pub fn extract_elements(html: &str, selector: &str) -> Result<String, ProviderError> {
    let parsed = Selector::parse(selector)
        .map_err(|e| ProviderError::InvalidSelector(format!("'{}': {}", selector, e)))?;

    let document = Html::parse_document(html);
    let blocks: Vec<String> = document
        .select(&parsed)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect();

    if blocks.is_empty() {
        return Err(ProviderError::NothingExtracted(format!(
            "no elements matched selector '{}'",
            selector
        )));
    }

    Ok(blocks.join("\n"))
}

/// Collapse an element's text nodes into a single whitespace-normalized line
fn element_text(element: scraper::ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
