//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be produced.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A `{name}` placeholder in the path had no value.
    #[error("unresolved path parameter: {0}")]
    UnresolvedPathParam(String),

    /// More positional path parameters were given than placeholders exist.
    #[error("unused path parameters: {0}")]
    UnusedPathParams(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
