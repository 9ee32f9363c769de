//! Application layer for crewrun
//!
//! This crate contains the use cases and the ports through which the
//! application reaches its external collaborators: the orchestration
//! runtime that executes a crew, and the capability providers the
//! runtime routes extraction work to. Implementations (adapters) live
//! in the infrastructure layer.

pub mod ports;
pub mod use_cases;

pub use ports::capability_provider::{CapabilityProvider, ProviderError};
pub use ports::crew_runtime::{CrewRuntime, RuntimeError};
pub use use_cases::run_crew::{RunCrewError, RunCrewUseCase};
