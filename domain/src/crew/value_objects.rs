//! Crew value objects - immutable result of a completed run.

use serde::{Deserialize, Serialize};

/// Opaque text payload returned after running an [`ExecutionUnit`] to
/// completion.
///
/// [`ExecutionUnit`]: crate::crew::entities::ExecutionUnit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    text: String,
}

impl ExecutionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw payload as returned by the runtime
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The payload with leading and trailing whitespace removed.
    ///
    /// This is the form the printer emits.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}

impl std::fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.trimmed_text())
    }
}
