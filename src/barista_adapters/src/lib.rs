pub mod auth_validation;
pub mod config;
pub mod handlers;
pub mod http;
pub mod persistence;

pub use auth_validation::{
    BearerJwtValidator, CachedJwkSet, JwtValidationConfig, KeySetError, KeySetProvider,
    RemoteJwkSet, StaticJwkSet,
};
pub use http::ApiError;
pub use persistence::{HashMapDrinkStore, PostgresDrinkStore};
