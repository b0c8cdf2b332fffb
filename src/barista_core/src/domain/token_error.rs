use thiserror::Error;

/// Reasons a bearer token is rejected before any permission is checked.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Authorization token not found")]
    MissingToken,
    #[error("Authorization header is malformed: {0}")]
    MalformedHeader(String),
    #[error("Token signature is invalid")]
    InvalidSignature,
    #[error("Token claims are invalid: {0}")]
    InvalidClaims(String),
    #[error("No signing key matches key id {0}")]
    KeyNotFound(String),
    #[error("Signing keys are unavailable: {0}")]
    KeySetUnavailable(String),
}
