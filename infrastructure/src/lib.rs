//! Infrastructure layer for crewrun
//!
//! Concrete adapters for the application layer's ports: the capability
//! providers that perform the actual extraction work, and the local
//! crew runtime that routes a unit's task to the matching provider.

pub mod providers;
pub mod runtime;

pub use providers::scrape::ScrapeProvider;
pub use providers::vision::{VisionConfig, VisionProvider};
pub use runtime::local::LocalCrewRuntime;
