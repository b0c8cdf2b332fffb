pub mod bearer_jwt_validator;
pub mod jwks;

pub use bearer_jwt_validator::{BearerJwtValidator, JwtValidationConfig};
pub use jwks::{CachedJwkSet, KeySetError, KeySetProvider, RemoteJwkSet, StaticJwkSet};
