//! Crew domain module
//!
//! The "crew" is the minimal execution unit submitted to the
//! orchestration runtime: a set of agents and an ordered sequence of
//! tasks. In this pattern it always holds exactly one of each.

pub mod entities;
pub mod value_objects;

pub use entities::ExecutionUnit;
pub use value_objects::ExecutionResult;
