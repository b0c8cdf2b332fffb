//! Envelope responses for requests no route handles.

use barista_adapters::ApiError;

/// Router fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Method fallback for known paths with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
