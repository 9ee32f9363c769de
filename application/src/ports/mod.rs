//! Ports (interfaces) for external collaborators

pub mod capability_provider;
pub mod crew_runtime;
