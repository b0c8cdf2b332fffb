//! Permission gate for protected routes.
//!
//! The gate validates the bearer token, checks the route's required permission
//! and attaches the resulting [`AccessClaims`] to the request extensions. A
//! rejected request never reaches the route handler.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use barista_adapters::ApiError;
use barista_application::AuthorizeUseCase;
use barista_core::{AccessClaims, AuthValidator, Permission, TokenError};

/// State of [`require_permission`]: the validator and the permission one route
/// requires.
#[derive(Clone)]
pub struct PermissionGate<V> {
    validator: V,
    required: Permission,
}

impl<V> PermissionGate<V> {
    pub fn new(validator: V, required: Permission) -> Self {
        Self {
            validator,
            required,
        }
    }

    pub fn required(&self) -> &Permission {
        &self.required
    }
}

/// Middleware for `axum::middleware::from_fn_with_state`.
pub async fn require_permission<V>(
    State(gate): State<PermissionGate<V>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    V: AuthValidator<Claims = AccessClaims, Error = TokenError, RequestParts = http::request::Parts>,
{
    let (parts, body) = request.into_parts();
    let required = gate.required();

    let claims = AuthorizeUseCase::new(&gate.validator)
        .execute(&parts, required)
        .await
        .inspect_err(|e| {
            tracing::warn!(
                permission = %required,
                method = %parts.method,
                path = parts.uri.path(),
                error = %e,
                "Permission gate rejected request"
            )
        })?;

    tracing::debug!(subject = claims.subject(), permission = %required, "Permission granted");

    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
