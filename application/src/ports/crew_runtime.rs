//! Crew Runtime port
//!
//! Defines the interface to the orchestration runtime: "given one agent
//! and one task, run to completion and return text". The runtime owns
//! all tool-invocation sequencing and any internal resilience policy;
//! this layer neither inspects nor controls its internal steps, and
//! treats any error it surfaces as fatal.

use super::capability_provider::ProviderError;
use async_trait::async_trait;
use crewrun_domain::{DomainError, ExecutionResult, ExecutionUnit};
use thiserror::Error;

/// Errors surfaced by the orchestration runtime
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("No provider registered for capability '{0}'")]
    NoProvider(String),

    #[error("Capability provider failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("Rejected execution unit: {0}")]
    RejectedUnit(#[from] DomainError),

    #[error("Runtime error: {0}")]
    Other(String),
}

/// Port for crew execution
///
/// One awaited call per invocation. Implementations may take multiple
/// internal steps (tool invocation, intermediate reasoning); callers
/// treat the call as an atomic black box returning either result text
/// or a fatal error.
#[async_trait]
pub trait CrewRuntime: Send + Sync {
    /// Run the unit to completion and return its result.
    async fn kickoff(&self, unit: &ExecutionUnit) -> Result<ExecutionResult, RuntimeError>;
}
