use barista_adapters::{
    BearerJwtValidator, CachedJwkSet, JwtValidationConfig, KeySetError, RemoteJwkSet,
    config::{AuthSettings, PostgresSettings},
};
use barista_core::{DrinkStore, DrinkStoreError, DrinkTitle, Ingredient, NewDrink, Recipe};
use secrecy::ExposeSecret;
use sqlx::{PgPool, migrate::MigrateError, postgres::PgPoolOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to connect to PostgreSQL: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migration(#[from] MigrateError),
    #[error("Failed to configure key set: {0}")]
    KeySet(#[from] KeySetError),
    #[error("Failed to seed sample drink: {0}")]
    Seed(#[from] DrinkStoreError),
}

/// Configure and return a PostgreSQL connection pool
///
/// Creates the pool and runs all pending migrations.
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, SetupError> {
    let pg_pool =
        get_postgres_pool(settings.url.expose_secret(), settings.max_connections).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Pool size
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Build the bearer token validator for the configured signing authority
pub fn bearer_validator(
    settings: &AuthSettings,
) -> Result<BearerJwtValidator<RemoteJwkSet>, SetupError> {
    let remote = RemoteJwkSet::new(settings.jwks_url.clone(), settings.jwks_timeout())?;

    Ok(BearerJwtValidator::new(
        CachedJwkSet::with_refresh_cooldown(
            remote,
            settings.jwks_cache_ttl(),
            settings.jwks_refresh_cooldown(),
        ),
        JwtValidationConfig::from(settings),
    ))
}

/// Insert the sample `water` drink when the store is empty
///
/// # Returns
/// Whether the drink was inserted
pub async fn seed_sample_drink<S: DrinkStore>(store: &S) -> Result<bool, SetupError> {
    if !store.list_drinks().await?.is_empty() {
        return Ok(false);
    }

    let water = NewDrink::new(
        DrinkTitle::try_from("water").map_err(sample_error)?,
        Recipe::try_from(vec![Ingredient::new("blue", "water", 1)]).map_err(sample_error)?,
    );
    store.add_drink(water).await?;

    tracing::info!("Seeded sample drink");
    Ok(true)
}

fn sample_error(error: barista_core::DrinkError) -> SetupError {
    SetupError::Seed(DrinkStoreError::UnexpectedError(error.to_string()))
}
