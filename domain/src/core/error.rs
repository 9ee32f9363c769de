//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid capability binding: {0}")]
    InvalidBinding(String),

    #[error("Agent '{0}' declares no capability")]
    NoCapability(String),

    #[error("Unresolved placeholder '{{{0}}}' in instruction template")]
    UnresolvedPlaceholder(String),

    #[error("Unterminated placeholder in instruction template near '{0}'")]
    UnterminatedPlaceholder(String),

    #[error("Invalid execution unit: {0}")]
    InvalidUnit(String),
}

impl DomainError {
    /// Check if this error was raised while constructing a capability binding
    pub fn is_binding_error(&self) -> bool {
        matches!(self, DomainError::InvalidBinding(_))
    }
}
