use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::permission::{Permission, PermissionError};

/// Claims of a bearer token whose signature, issuer, audience and expiry
/// have already been verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessClaims {
    subject: String,
    permissions: Option<HashSet<Permission>>,
    expires_at: DateTime<Utc>,
    issuer: String,
    audience: Vec<String>,
}

impl AccessClaims {
    pub fn new(
        subject: String,
        permissions: Option<HashSet<Permission>>,
        expires_at: DateTime<Utc>,
        issuer: String,
        audience: Vec<String>,
    ) -> Self {
        Self {
            subject,
            permissions,
            expires_at,
            issuer,
            audience,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// `None` when the token carried no permissions claim at all.
    pub fn permissions(&self) -> Option<&HashSet<Permission>> {
        self.permissions.as_ref()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &[String] {
        &self.audience
    }

    pub fn require(&self, required: &Permission) -> Result<(), PermissionError> {
        let permissions = self
            .permissions
            .as_ref()
            .ok_or(PermissionError::MissingPermissionsClaim)?;

        if permissions.contains(required) {
            Ok(())
        } else {
            Err(PermissionError::InsufficientScope {
                required: required.clone(),
            })
        }
    }
}
