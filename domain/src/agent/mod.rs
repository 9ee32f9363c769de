//! Agent domain module

pub mod entities;

pub use entities::AgentDescriptor;
