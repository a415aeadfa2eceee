//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
///
/// Domain errors are classified into one of these kinds before they reach
/// the transport layer.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        CoreError::InvalidStateTransition(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }

    /// Returns the detail message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation(msg)
            | CoreError::InvalidStateTransition(msg)
            | CoreError::NotFound(msg)
            | CoreError::Configuration(msg) => msg,
        }
    }
}
