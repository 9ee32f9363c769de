//! Built-in crew profiles
//!
//! One profile per CLI variant. Each profile binds the capability to the
//! invocation's parameters, describes the agent and its task, and
//! assembles the one-agent, one-task execution unit. The role, goal,
//! and backstory strings are fixed; only the instruction (and, for
//! scraping, the goal) interpolates the runtime parameters.

use crate::agent::entities::AgentDescriptor;
use crate::capability::entities::{CapabilityBinding, CapabilityKind};
use crate::core::error::DomainError;
use crate::crew::entities::ExecutionUnit;
use crate::task::entities::TaskDescriptor;
use crate::task::template::InstructionTemplate;
use std::collections::HashMap;

/// Build the vision (OCR) crew for an image locator.
pub fn vision_crew(locator: &str) -> Result<ExecutionUnit, DomainError> {
    let binding = CapabilityBinding::vision(locator)?;

    let agent = AgentDescriptor::new(
        "OCR Agent",
        "Extract text from images accurately",
        "Expert in reading and extracting text from image files using computer vision.",
        binding,
    );

    let instruction = InstructionTemplate::new(
        "Extract all readable text from the image at '{locator}'.",
    )
    .render(&HashMap::from([("locator", locator)]))?;

    let task = TaskDescriptor::new(
        instruction,
        "Text extracted from the image.",
        agent.clone(),
        CapabilityKind::VisionExtract,
    )
    .with_context("image_path_url", locator);

    ExecutionUnit::single(agent, task)
}

/// Build the scraping crew for a page locator and CSS selector.
pub fn scrape_crew(locator: &str, selector: &str) -> Result<ExecutionUnit, DomainError> {
    let binding = CapabilityBinding::scrape(locator, selector)?;

    let params = HashMap::from([("locator", locator), ("selector", selector)]);

    let goal = InstructionTemplate::new("Extract content from {locator} using selector {selector}")
        .render(&params)?;

    let agent = AgentDescriptor::new(
        "Web Extractor",
        goal,
        "Expert at extracting specific elements from websites using CSS selectors.",
        binding,
    );

    let instruction =
        InstructionTemplate::new("Extract content from {locator} using CSS selector '{selector}'.")
            .render(&params)?;

    let task = TaskDescriptor::new(
        instruction,
        "Plain text content of the matching elements.",
        agent.clone(),
        CapabilityKind::ScrapeElements,
    );

    ExecutionUnit::single(agent, task)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vision_crew_shape() {
        let unit = vision_crew("https://example.com/image.png").unwrap();

        assert_eq!(unit.agents.len(), 1);
        assert_eq!(unit.tasks.len(), 1);

        let task = unit.single_task().unwrap();
        assert!(task.instruction.contains("https://example.com/image.png"));
        assert_eq!(task.required_capability, CapabilityKind::VisionExtract);
        assert_eq!(
            task.context.get("image_path_url").map(String::as_str),
            Some("https://example.com/image.png")
        );

        let binding = task.agent.capability(CapabilityKind::VisionExtract).unwrap();
        assert_eq!(binding.locator, "https://example.com/image.png");
    }

    #[test]
    fn test_scrape_crew_shape() {
        let unit = scrape_crew("https://example.com", "div.title").unwrap();

        let task = unit.single_task().unwrap();
        assert!(task.instruction.contains("https://example.com"));
        assert!(task.instruction.contains("'div.title'"));
        assert!(task.context.is_empty());

        let binding = task.agent.capability(CapabilityKind::ScrapeElements).unwrap();
        assert_eq!(binding.locator, "https://example.com");
        assert_eq!(binding.selector(), Some("div.title"));
        assert!(task.agent.goal.contains("div.title"));
    }

    #[test]
    fn test_profiles_reject_empty_parameters() {
        assert!(vision_crew("").is_err());
        assert!(scrape_crew("", "div").is_err());
        assert!(scrape_crew("https://example.com", "").is_err());
    }
}
