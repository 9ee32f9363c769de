//! Task domain entities

use crate::agent::entities::AgentDescriptor;
use crate::capability::entities::CapabilityKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single unit of instructed work assigned to one agent.
///
/// The instruction is the already-rendered, parameter-specific text (see
/// [`InstructionTemplate`](crate::task::template::InstructionTemplate));
/// `expected_output` tells the runtime what a completed result looks
/// like. The optional context map carries the same parameters in
/// structured form for tools that prefer structured input over parsed
/// natural language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// Natural-language instruction, with runtime parameters interpolated
    pub instruction: String,
    /// Description of the output the runtime should judge completion by
    pub expected_output: String,
    /// The one agent this task is assigned to
    pub agent: AgentDescriptor,
    /// Capability the instruction requires from the assigned agent
    pub required_capability: CapabilityKind,
    /// Auxiliary key/value pairs mirroring the instruction's parameters
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, String>,
}

impl TaskDescriptor {
    pub fn new(
        instruction: impl Into<String>,
        expected_output: impl Into<String>,
        agent: AgentDescriptor,
        required_capability: CapabilityKind,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            expected_output: expected_output.into(),
            agent,
            required_capability,
            context: HashMap::new(),
        }
    }

    /// Attach a context entry (builder pattern)
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Whether the assigned agent declares the capability this task requires
    pub fn agent_is_capable(&self) -> bool {
        self.agent.has_capability(self.required_capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::entities::CapabilityBinding;

    #[test]
    fn test_task_references_capable_agent() {
        let binding = CapabilityBinding::vision("/tmp/scan.png").unwrap();
        let agent = AgentDescriptor::new("OCR Agent", "Extract text", "Expert.", binding);

        let task = TaskDescriptor::new(
            "Extract all readable text from the image at '/tmp/scan.png'.",
            "Text extracted from the image.",
            agent,
            CapabilityKind::VisionExtract,
        )
        .with_context("image_path_url", "/tmp/scan.png");

        assert!(task.agent_is_capable());
        assert_eq!(
            task.context.get("image_path_url").map(String::as_str),
            Some("/tmp/scan.png")
        );
    }

    #[test]
    fn test_task_with_incapable_agent() {
        let binding = CapabilityBinding::vision("/tmp/scan.png").unwrap();
        let agent = AgentDescriptor::new("OCR Agent", "Extract text", "Expert.", binding);

        let task = TaskDescriptor::new(
            "Extract content from https://example.com using CSS selector 'div'.",
            "Plain text content of the matching elements.",
            agent,
            CapabilityKind::ScrapeElements,
        );

        assert!(!task.agent_is_capable());
    }
}
