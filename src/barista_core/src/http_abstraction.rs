//! Zero-cost HTTP abstraction traits.
//!
//! Frameworks implement these traits on their own types (via newtype wrappers),
//! so token extraction and response building stay framework-agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  barista_core: Defines HTTP traits       │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  barista_axum: Newtype wrappers          │
//! │  impl ApiResponseBuilder for             │
//! │      AxumResponseBuilder { }             │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  Handlers use the trait methods          │
//! │  (generic over framework)                │
//! └──────────────────────────────────────────┘
//! ```

use crate::domain::token_error::TokenError;

pub const AUTHORIZATION_HEADER: &str = "authorization";
const BEARER_SCHEME: &str = "bearer";

/// Trait for HTTP requests that carry a bearer token.
///
/// # Implementation Notes
///
/// - Return `&str` references directly from the framework's data structures
/// - Case-insensitive header lookup should be handled by implementor
pub trait AuthRequest {
    /// Get a header value by name.
    ///
    /// Returns `None` if the header doesn't exist or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get the request path
    fn path(&self) -> &str;

    /// The token of an `Authorization: Bearer <token>` header.
    fn bearer_token(&self) -> Result<&str, TokenError> {
        let header = self.header(AUTHORIZATION_HEADER).ok_or_else(|| {
            TokenError::MalformedHeader("Authorization header is expected".to_owned())
        })?;

        parse_bearer(header)
    }
}

/// Split an `Authorization` header value into its bearer token.
///
/// The scheme is matched case-insensitively. A bare `Bearer` is a missing
/// token; any other scheme or extra segments make the header malformed.
pub fn parse_bearer(header: &str) -> Result<&str, TokenError> {
    let mut parts = header.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), _, _) if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) => Err(
            TokenError::MalformedHeader("Authorization header must start with Bearer".to_owned()),
        ),
        (Some(_), None, _) => Err(TokenError::MissingToken),
        (Some(_), Some(token), None) => Ok(token),
        (Some(_), Some(_), Some(_)) => Err(TokenError::MalformedHeader(
            "Authorization header must be a bearer token".to_owned(),
        )),
        (None, _, _) => Err(TokenError::MalformedHeader(
            "Authorization header is empty".to_owned(),
        )),
    }
}

/// Trait for building HTTP responses.
///
/// This follows the builder pattern, allowing method chaining:
/// ```ignore
/// builder
///     .status(200)
///     .header("x-request-id", "abc")
///     .json_body(json!({"success": true}))
///     .build()
/// ```
pub trait ApiResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    ///
    /// This consumes the builder and produces the framework's response type.
    fn build(self) -> Self::Response;
}

/// Helper methods for the `{success, ...}` envelope every endpoint answers with.
///
/// Automatically implemented for all types that implement `ApiResponseBuilder`.
pub trait ApiResponseHelpers: ApiResponseBuilder {
    /// 200 OK with `success: true` merged into the given object
    fn success(self, mut body: serde_json::Value) -> Self::Response {
        if let Some(object) = body.as_object_mut() {
            object.insert("success".to_owned(), serde_json::Value::Bool(true));
        }
        self.status(200).json_body(body).build()
    }

    /// Error response `{success: false, error: <code>, message: <text>}`
    fn failure(self, code: u16, message: &str) -> Self::Response {
        self.status(code)
            .json_body(serde_json::json!({
                "success": false,
                "error": code,
                "message": message,
            }))
            .build()
    }
}

// Blanket implementation for all ApiResponseBuilder types
impl<T: ApiResponseBuilder> ApiResponseHelpers for T {}
