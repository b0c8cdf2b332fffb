use barista_core::{AccessClaims, AuthValidator, Permission, PermissionError, TokenError};

/// Error types for authorize use case
#[derive(Debug, thiserror::Error)]
pub enum AuthorizeError {
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

/// Authorize use case - validates the bearer token, then checks that it
/// grants the permission the route requires.
pub struct AuthorizeUseCase<'a, V>
where
    V: AuthValidator<Claims = AccessClaims, Error = TokenError>,
{
    validator: &'a V,
}

impl<'a, V> AuthorizeUseCase<'a, V>
where
    V: AuthValidator<Claims = AccessClaims, Error = TokenError>,
{
    pub fn new(validator: &'a V) -> Self {
        Self { validator }
    }

    /// Execute the authorize use case
    ///
    /// # Returns
    /// The validated claims when the token is valid and carries `required`
    #[tracing::instrument(name = "AuthorizeUseCase::execute", skip(self, parts))]
    pub async fn execute(
        &self,
        parts: &V::RequestParts,
        required: &Permission,
    ) -> Result<AccessClaims, AuthorizeError> {
        let claims = self.validator.validate(parts).await?;
        claims.require(required)?;

        Ok(claims)
    }
}
