//! Local crew runtime — the concrete implementation of [`CrewRuntime`].
//!
//! Routes the unit's single task to the provider registered for the
//! capability its agent binds, awaits the extraction, and wraps the
//! text in an [`ExecutionResult`]. No retries and no partial results:
//! a provider failure fails the whole run.

use async_trait::async_trait;
use crewrun_application::ports::capability_provider::CapabilityProvider;
use crewrun_application::ports::crew_runtime::{CrewRuntime, RuntimeError};
use crewrun_domain::{CapabilityKind, DomainError, ExecutionResult, ExecutionUnit};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime that executes crews in-process.
///
/// Providers are registered per [`CapabilityKind`]; registering a second
/// provider for the same kind replaces the first.
pub struct LocalCrewRuntime {
    providers: HashMap<CapabilityKind, Arc<dyn CapabilityProvider>>,
}

impl LocalCrewRuntime {
    /// Create a runtime with no providers
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a capability provider (builder pattern)
    pub fn register(mut self, provider: Arc<dyn CapabilityProvider>) -> Self {
        self.providers.insert(provider.kind(), provider);
        self
    }

    /// Check whether a provider is registered for the given capability
    pub fn has_provider(&self, kind: CapabilityKind) -> bool {
        self.providers.contains_key(&kind)
    }
}

impl Default for LocalCrewRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrewRuntime for LocalCrewRuntime {
    async fn kickoff(&self, unit: &ExecutionUnit) -> Result<ExecutionResult, RuntimeError> {
        let task = unit.single_task()?;
        let kind = task.required_capability;

        let binding = task
            .agent
            .capability(kind)
            .ok_or_else(|| RuntimeError::RejectedUnit(DomainError::NoCapability(task.agent.role.clone())))?;

        let provider = self
            .providers
            .get(&kind)
            .ok_or_else(|| RuntimeError::NoProvider(kind.to_string()))?;

        debug!(capability = %kind, locator = %binding.locator, "Routing task to provider");
        let text = provider.extract(binding).await?;
        info!(capability = %kind, bytes = text.len(), "Extraction completed");

        Ok(ExecutionResult::new(text))
    }
}
