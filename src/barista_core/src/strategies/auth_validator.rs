use async_trait::async_trait;

/// Trait for validating bearer tokens in middleware.
///
/// Validators extract the token from the HTTP request, verify it against the
/// signing authority and produce claims for the permission check that follows.
///
/// # Implementation Note
///
/// The validator receives `RequestParts` (headers, method, URI, extensions) rather
/// than the full `Request` to avoid issues with non-`Sync` request bodies.
/// This is sufficient since validators only need headers to extract tokens.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// The claims extracted from a valid token.
    ///
    /// These are attached to the request and made available to the gated
    /// route handler.
    type Claims: Clone + Send + Sync + 'static;

    /// The request parts type this validator operates on.
    ///
    /// Typically `http::request::Parts` containing headers, method, URI, etc.
    type RequestParts: Send + Sync;

    /// Errors that can occur during validation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Validate the bearer token carried by the request parts.
    ///
    /// This method:
    /// 1. Extracts the token from the `Authorization` header
    /// 2. Verifies signature, expiry, issuer and audience
    /// 3. Returns the claims to be used by the permission check
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The header is absent or malformed
    /// - The token is invalid or expired
    /// - No signing key matches the token
    /// - The signing keys cannot be fetched
    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error>;
}
