//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hybrid mode state: {0}")]
    InvalidState(String),

    #[error("Invalid control kind: {0}")]
    InvalidControlKind(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}
