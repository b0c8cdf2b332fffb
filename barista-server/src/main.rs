use barista::{
    DrinkStore, DrinksService, HashMapDrinkStore, PostgresDrinkStore, adapters::config::BaristaSettings,
    bearer_validator, configure_postgresql, seed_sample_drink,
};
use color_eyre::eyre::Result;
use tokio::net::TcpListener;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = BaristaSettings::load()?;

    let validator = bearer_validator(&config.auth)?;
    let listener = TcpListener::bind(&config.application.address).await?;

    match &config.postgres {
        Some(postgres) => {
            let pg_pool = configure_postgresql(postgres).await?;
            serve(PostgresDrinkStore::new(pg_pool), validator, listener, &config).await
        }
        None => {
            tracing::warn!("No PostgreSQL configured, drinks are kept in memory");
            serve(HashMapDrinkStore::new(), validator, listener, &config).await
        }
    }
}

async fn serve<S>(
    drink_store: S,
    validator: barista::BearerJwtValidator<barista::RemoteJwkSet>,
    listener: TcpListener,
    config: &BaristaSettings,
) -> Result<()>
where
    S: DrinkStore + Clone + 'static,
{
    if config.application.seed_sample_drink {
        seed_sample_drink(&drink_store).await?;
    }

    let allowed_origins = config.application.allowed_origins.clone();

    DrinksService::new(drink_store, validator)
        .run_standalone(listener, Some(allowed_origins))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
