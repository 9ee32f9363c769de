//! Domain layer for crewrun
//!
//! This crate contains the core value records and domain logic for
//! single-task tool-execution orchestration. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Capability
//!
//! A [`CapabilityBinding`] is one configured external extraction tool
//! (read text from an image, scrape matching elements from a page),
//! bound to its parameters once per invocation.
//!
//! ## Crew
//!
//! An [`ExecutionUnit`] is the minimal grouping of one agent and one
//! task, submitted as a whole to an orchestration runtime which runs it
//! to completion and returns an [`ExecutionResult`].

pub mod agent;
pub mod capability;
pub mod core;
pub mod crew;
pub mod profile;
pub mod task;
pub mod util;

// Re-export commonly used types
pub use agent::entities::AgentDescriptor;
pub use capability::entities::{CapabilityBinding, CapabilityKind};
pub use core::error::DomainError;
pub use crew::{
    entities::ExecutionUnit,
    value_objects::ExecutionResult,
};
pub use profile::{scrape_crew, vision_crew};
pub use task::{entities::TaskDescriptor, template::InstructionTemplate};
pub use util::log_preview;
