use std::sync::Arc;

use async_trait::async_trait;
use barista_core::{AccessClaims, AuthRequest, AuthValidator, Permission, TokenError};
use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, Validation, decode, decode_header,
    errors::{Error as JwtError, ErrorKind},
};
use serde::Deserialize;

use super::jwks::{CachedJwkSet, KeySetProvider};

#[derive(Debug, Clone)]
pub struct JwtValidationConfig {
    pub issuer: String,
    pub audience: String,
    pub algorithms: Vec<Algorithm>,
    pub leeway_in_seconds: u64,
}

/// Validates `Authorization: Bearer` tokens against the signing authority's
/// key set.
pub struct BearerJwtValidator<P> {
    key_set: CachedJwkSet<P>,
    config: Arc<JwtValidationConfig>,
}

impl<P> Clone for BearerJwtValidator<P> {
    fn clone(&self) -> Self {
        Self {
            key_set: self.key_set.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<P: KeySetProvider> BearerJwtValidator<P> {
    pub fn new(key_set: CachedJwkSet<P>, config: JwtValidationConfig) -> Self {
        Self {
            key_set,
            config: Arc::new(config),
        }
    }

    /// Verify a raw token: header, signing key, signature, then claims.
    pub async fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let header =
            decode_header(token).map_err(|e| TokenError::MalformedHeader(e.to_string()))?;

        if !self.accepts(header.alg) {
            return Err(TokenError::MalformedHeader(format!(
                "algorithm {:?} is not accepted",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| TokenError::MalformedHeader("token header has no kid".to_owned()))?;

        let key = self.key_set.decoding_key(&kid).await?;

        let token_data = decode::<TokenClaims>(token, &key, &self.validation(header.alg))
            .map_err(token_error)?;

        token_data.claims.try_into()
    }

    fn accepts(&self, algorithm: Algorithm) -> bool {
        if self.config.algorithms.is_empty() {
            return algorithm == Algorithm::RS256;
        }
        self.config.algorithms.contains(&algorithm)
    }

    fn validation(&self, algorithm: Algorithm) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        validation.validate_nbf = true;
        validation.leeway = self.config.leeway_in_seconds;
        validation
    }
}

#[async_trait]
impl<P: KeySetProvider> AuthValidator for BearerJwtValidator<P> {
    type Claims = AccessClaims;
    type RequestParts = http::request::Parts;
    type Error = TokenError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error> {
        let request = PartsRequest(parts);
        let token = request.bearer_token().inspect_err(|e| {
            tracing::debug!(
                method = request.method(),
                path = request.path(),
                error = %e,
                "No usable bearer token"
            )
        })?;

        self.verify(token).await
    }
}

struct PartsRequest<'a>(&'a http::request::Parts);

impl AuthRequest for PartsRequest<'_> {
    fn header(&self, name: &str) -> Option<&str> {
        self.0
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    fn method(&self) -> &str {
        self.0.method.as_str()
    }

    fn path(&self) -> &str {
        self.0.uri.path()
    }
}

fn token_error(error: JwtError) -> TokenError {
    match error.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature
        | ErrorKind::ImmatureSignature
        | ErrorKind::InvalidIssuer
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidSubject
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::Json(_) => TokenError::InvalidClaims(error.to_string()),
        _ => TokenError::MalformedHeader(error.to_string()),
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Audience {
    One(String),
    Many(Vec<String>),
}

impl From<Audience> for Vec<String> {
    fn from(audience: Audience) -> Self {
        match audience {
            Audience::One(audience) => vec![audience],
            Audience::Many(audiences) => audiences,
        }
    }
}

// Wire format of the token payload
#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[serde(default)]
    sub: String,
    exp: i64,
    iss: String,
    aud: Audience,
    #[serde(default)]
    permissions: Option<Vec<String>>,
}

impl TryFrom<TokenClaims> for AccessClaims {
    type Error = TokenError;

    fn try_from(claims: TokenClaims) -> Result<Self, Self::Error> {
        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| TokenError::InvalidClaims("exp is out of range".to_owned()))?;

        let permissions = claims
            .permissions
            .map(|permissions| permissions.into_iter().map(Permission::from).collect());

        Ok(AccessClaims::new(
            claims.sub,
            permissions,
            expires_at,
            claims.iss,
            claims.aud.into(),
        ))
    }
}
