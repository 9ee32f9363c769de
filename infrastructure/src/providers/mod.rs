//! Capability providers
//!
//! Each provider implements the application layer's
//! [`CapabilityProvider`](crewrun_application::CapabilityProvider) port
//! for one capability kind.

pub mod scrape;
pub mod vision;

/// Shared HTTP client defaults for providers
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
}

/// User-Agent sent by providers
pub(crate) const USER_AGENT: &str = "crewrun/0.1 (Capability Provider)";
