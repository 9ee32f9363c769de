//! Crew domain entities

use crate::agent::entities::AgentDescriptor;
use crate::core::error::DomainError;
use crate::task::entities::TaskDescriptor;
use serde::{Deserialize, Serialize};

/// The unit of work submitted to the orchestration runtime.
///
/// Assembly validates the invariants of the single-task pattern:
/// every task's assigned agent must be a member of `agents`, and the
/// assigned agent must declare the capability the task requires. The
/// runtime treats the unit as a whole and runs it to completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionUnit {
    /// Agents participating in this unit
    pub agents: Vec<AgentDescriptor>,
    /// Tasks to run, in order
    pub tasks: Vec<TaskDescriptor>,
}

impl ExecutionUnit {
    /// Assemble a one-agent, one-task unit.
    pub fn single(agent: AgentDescriptor, task: TaskDescriptor) -> Result<Self, DomainError> {
        Self::new(vec![agent], vec![task])
    }

    /// Assemble a unit, validating membership and capability invariants.
    pub fn new(
        agents: Vec<AgentDescriptor>,
        tasks: Vec<TaskDescriptor>,
    ) -> Result<Self, DomainError> {
        if agents.is_empty() {
            return Err(DomainError::InvalidUnit("no agents".to_string()));
        }
        if tasks.is_empty() {
            return Err(DomainError::InvalidUnit("no tasks".to_string()));
        }
        for task in &tasks {
            if !agents.contains(&task.agent) {
                return Err(DomainError::InvalidUnit(format!(
                    "task agent '{}' is not a member of the unit",
                    task.agent.role
                )));
            }
            if !task.agent_is_capable() {
                return Err(DomainError::NoCapability(task.agent.role.clone()));
            }
        }
        Ok(Self { agents, tasks })
    }

    /// The unit's single task.
    ///
    /// Fails if the unit holds more than one task; the single-task
    /// pattern is the only shape the local runtime executes.
    pub fn single_task(&self) -> Result<&TaskDescriptor, DomainError> {
        match self.tasks.as_slice() {
            [task] => Ok(task),
            _ => Err(DomainError::InvalidUnit(format!(
                "expected exactly one task, found {}",
                self.tasks.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::entities::{CapabilityBinding, CapabilityKind};

    fn vision_agent() -> AgentDescriptor {
        let binding = CapabilityBinding::vision("https://example.com/image.png").unwrap();
        AgentDescriptor::new("OCR Agent", "Extract text", "Expert.", binding)
    }

    fn vision_task(agent: AgentDescriptor) -> TaskDescriptor {
        TaskDescriptor::new(
            "Extract all readable text from the image at 'https://example.com/image.png'.",
            "Text extracted from the image.",
            agent,
            CapabilityKind::VisionExtract,
        )
    }

    #[test]
    fn test_single_unit_assembles() {
        let agent = vision_agent();
        let task = vision_task(agent.clone());

        let unit = ExecutionUnit::single(agent, task).unwrap();
        assert_eq!(unit.agents.len(), 1);
        assert_eq!(unit.tasks.len(), 1);
        assert!(unit.single_task().is_ok());
    }

    #[test]
    fn test_unit_rejects_foreign_agent() {
        let member = vision_agent();
        let outsider = AgentDescriptor::new(
            "Web Extractor",
            "Extract content",
            "Expert.",
            CapabilityBinding::scrape("https://example.com", "div").unwrap(),
        );
        let task = vision_task(outsider);

        let err = ExecutionUnit::single(member, task).unwrap_err();
        assert!(matches!(err, DomainError::InvalidUnit(_)));
    }

    #[test]
    fn test_unit_rejects_incapable_agent() {
        let agent = vision_agent();
        let task = TaskDescriptor::new(
            "Extract content using CSS selector 'div'.",
            "Plain text content.",
            agent.clone(),
            CapabilityKind::ScrapeElements,
        );

        let err = ExecutionUnit::single(agent, task).unwrap_err();
        assert!(matches!(err, DomainError::NoCapability(role) if role == "OCR Agent"));
    }

    #[test]
    fn test_unit_rejects_empty() {
        assert!(ExecutionUnit::new(vec![], vec![]).is_err());
        assert!(ExecutionUnit::new(vec![vision_agent()], vec![]).is_err());
    }

    #[test]
    fn test_single_task_rejects_multiple() {
        let agent = vision_agent();
        let unit = ExecutionUnit::new(
            vec![agent.clone()],
            vec![vision_task(agent.clone()), vision_task(agent)],
        )
        .unwrap();

        assert!(unit.single_task().is_err());
    }
}
