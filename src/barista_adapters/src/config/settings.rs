use std::time::Duration;

use axum::http::HeaderValue;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use jsonwebtoken::Algorithm;
use secrecy::Secret;
use serde::{Deserialize, Deserializer};

use super::constants::{
    DEFAULT_CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR, LOCAL_CONFIG_FILE, defaults,
};
use crate::auth_validation::JwtValidationConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct BaristaSettings {
    #[serde(default)]
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub postgres: Option<PostgresSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
    #[serde(default)]
    pub seed_sample_drink: bool,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
            allowed_origins: AllowedOrigins::default(),
            seed_sample_drink: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub issuer: String,
    pub audience: String,
    pub jwks_url: String,
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,
    #[serde(default = "default_jwks_cache_ttl")]
    pub jwks_cache_ttl_in_seconds: u64,
    #[serde(default = "default_jwks_timeout")]
    pub jwks_timeout_in_millis: u64,
    #[serde(default = "default_jwks_refresh_cooldown")]
    pub jwks_refresh_cooldown_in_seconds: u64,
    #[serde(default = "default_leeway")]
    pub leeway_in_seconds: u64,
}

impl AuthSettings {
    pub fn jwks_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.jwks_cache_ttl_in_seconds)
    }

    pub fn jwks_timeout(&self) -> Duration {
        Duration::from_millis(self.jwks_timeout_in_millis)
    }

    pub fn jwks_refresh_cooldown(&self) -> Duration {
        Duration::from_secs(self.jwks_refresh_cooldown_in_seconds)
    }
}

impl From<&AuthSettings> for JwtValidationConfig {
    fn from(settings: &AuthSettings) -> Self {
        JwtValidationConfig {
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            algorithms: settings.algorithms.clone(),
            leeway_in_seconds: settings.leeway_in_seconds,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// CORS allow-list. Accepts a list or a single comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .is_ok_and(|origin| self.0.iter().any(|allowed| allowed == origin))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for AllowedOrigins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Origins {
            List(Vec<String>),
            Joined(String),
        }

        let origins = match Origins::deserialize(deserializer)? {
            Origins::List(origins) => origins,
            Origins::Joined(origins) => origins.split(',').map(str::to_owned).collect(),
        };

        Ok(Self(
            origins
                .into_iter()
                .map(|origin| origin.trim().to_owned())
                .filter(|origin| !origin.is_empty())
                .collect(),
        ))
    }
}

impl BaristaSettings {
    /// Load settings from `config/default.json`, `config/local.json` and
    /// `BARISTA__*` environment variables, later sources overriding earlier ones.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::build(
            Config::builder()
                .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
                .add_source(File::with_name(LOCAL_CONFIG_FILE).required(false))
                .add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .separator(ENV_SEPARATOR)
                        .list_separator(",")
                        .with_list_parse_key("auth.algorithms")
                        .try_parsing(true),
                ),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

fn default_address() -> String {
    defaults::APP_ADDRESS.to_owned()
}

fn default_algorithms() -> Vec<Algorithm> {
    vec![Algorithm::RS256]
}

fn default_jwks_cache_ttl() -> u64 {
    defaults::JWKS_CACHE_TTL_IN_SECONDS
}

fn default_jwks_timeout() -> u64 {
    defaults::JWKS_TIMEOUT_IN_MILLIS
}

fn default_jwks_refresh_cooldown() -> u64 {
    defaults::JWKS_REFRESH_COOLDOWN_IN_SECONDS
}

fn default_leeway() -> u64 {
    defaults::LEEWAY_IN_SECONDS
}

fn default_max_connections() -> u32 {
    defaults::POSTGRES_MAX_CONNECTIONS
}
