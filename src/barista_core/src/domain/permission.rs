use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A permission (scope) string such as `post:drinks`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const fn from_static(permission: &'static str) -> Self {
        Self(Cow::Borrowed(permission))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Permission {
    fn from(permission: String) -> Self {
        Self(Cow::Owned(permission))
    }
}

impl From<&str> for Permission {
    fn from(permission: &str) -> Self {
        Self(Cow::Owned(permission.to_owned()))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const GET_DRINKS_DETAIL: Permission = Permission::from_static("get:drinks-detail");
pub const POST_DRINKS: Permission = Permission::from_static("post:drinks");
pub const PATCH_DRINKS: Permission = Permission::from_static("patch:drinks");
pub const DELETE_DRINKS: Permission = Permission::from_static("delete:drinks");

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PermissionError {
    #[error("Permissions not included in token")]
    MissingPermissionsClaim,
    #[error("Permission {required} not granted")]
    InsufficientScope { required: Permission },
}
