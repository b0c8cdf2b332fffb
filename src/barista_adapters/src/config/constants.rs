pub const ENV_PREFIX: &str = "BARISTA";
pub const ENV_SEPARATOR: &str = "__";

pub const DEFAULT_CONFIG_FILE: &str = "config/default";
pub const LOCAL_CONFIG_FILE: &str = "config/local";

pub mod defaults {
    pub const APP_ADDRESS: &str = "0.0.0.0:5000";
    pub const JWKS_CACHE_TTL_IN_SECONDS: u64 = 600;
    pub const JWKS_TIMEOUT_IN_MILLIS: u64 = 5000;
    pub const JWKS_REFRESH_COOLDOWN_IN_SECONDS: u64 = 30;
    pub const LEEWAY_IN_SECONDS: u64 = 60;
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;
}
