//! Crew runtime adapters

pub mod local;

pub use local::LocalCrewRuntime;
