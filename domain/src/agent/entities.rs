//! Agent domain entities

use crate::capability::entities::{CapabilityBinding, CapabilityKind};
use serde::{Deserialize, Serialize};

/// Static descriptor of an agent consumed by the orchestration runtime.
///
/// The role, goal, and backstory are descriptive metadata used by the
/// runtime for its internal reasoning; they carry no business logic.
/// Every agent declares at least one bound capability relevant to its
/// goal, enforced by requiring one at construction. Immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    /// Short role name (e.g., "OCR Agent")
    pub role: String,
    /// What the agent is meant to achieve
    pub goal: String,
    /// Background framing for the runtime's reasoning
    pub backstory: String,
    /// Capabilities the agent may use (at least one)
    pub capabilities: Vec<CapabilityBinding>,
    /// Whether the runtime should emit its intermediate reasoning
    pub verbose: bool,
}

impl AgentDescriptor {
    /// Create an agent with its first (and usually only) capability.
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
        capability: CapabilityBinding,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            capabilities: vec![capability],
            verbose: false,
        }
    }

    /// Add a further capability (builder pattern)
    pub fn with_capability(mut self, capability: CapabilityBinding) -> Self {
        self.capabilities.push(capability);
        self
    }

    /// Set runtime verbosity (builder pattern)
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check whether the agent declares a capability of the given kind
    pub fn has_capability(&self, kind: CapabilityKind) -> bool {
        self.capabilities.iter().any(|c| c.kind == kind)
    }

    /// The first binding of the given kind, if declared
    pub fn capability(&self, kind: CapabilityKind) -> Option<&CapabilityBinding> {
        self.capabilities.iter().find(|c| c.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vision_binding() -> CapabilityBinding {
        CapabilityBinding::vision("https://example.com/image.png").unwrap()
    }

    #[test]
    fn test_agent_has_at_least_one_capability() {
        let agent = AgentDescriptor::new(
            "OCR Agent",
            "Extract text from images accurately",
            "Expert in reading text from image files.",
            vision_binding(),
        );

        assert_eq!(agent.capabilities.len(), 1);
        assert!(agent.has_capability(CapabilityKind::VisionExtract));
        assert!(!agent.has_capability(CapabilityKind::ScrapeElements));
        assert!(!agent.verbose);
    }

    #[test]
    fn test_capability_lookup() {
        let scrape = CapabilityBinding::scrape("https://example.com", "div.title").unwrap();
        let agent = AgentDescriptor::new("Web Extractor", "Extract content", "Expert.", scrape)
            .with_verbose(true);

        let binding = agent.capability(CapabilityKind::ScrapeElements).unwrap();
        assert_eq!(binding.selector(), Some("div.title"));
        assert!(agent.capability(CapabilityKind::VisionExtract).is_none());
        assert!(agent.verbose);
    }
}
