//! Run Crew use case.
//!
//! Submits one assembled [`ExecutionUnit`] to the orchestration runtime
//! and returns its result. This is a pure delegation point: exactly one
//! `kickoff` call, no retries, no timeouts, no partial-result handling.
//! Any resilience policy belongs to the runtime behind the port.

use crate::ports::crew_runtime::{CrewRuntime, RuntimeError};
use crewrun_domain::{log_preview, ExecutionResult, ExecutionUnit};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running a crew.
#[derive(Error, Debug)]
pub enum RunCrewError {
    #[error("Execution failed: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Use case for running a one-agent, one-task crew to completion.
pub struct RunCrewUseCase {
    runtime: Arc<dyn CrewRuntime>,
}

impl RunCrewUseCase {
    pub fn new(runtime: Arc<dyn CrewRuntime>) -> Self {
        Self { runtime }
    }

    /// Execute the unit through the runtime.
    pub async fn execute(&self, unit: ExecutionUnit) -> Result<ExecutionResult, RunCrewError> {
        let task = unit.single_task().map_err(RuntimeError::RejectedUnit)?;
        info!(
            agent = %task.agent.role,
            capability = %task.required_capability,
            "Starting crew: {}",
            log_preview(&task.instruction, 100)
        );

        let result = self.runtime.kickoff(&unit).await?;

        debug!(bytes = result.text().len(), "Crew completed");
        Ok(result)
    }
}
