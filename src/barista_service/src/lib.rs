pub mod drinks_service;
pub mod helpers;
pub mod tracing;

pub use drinks_service::DrinksService;
pub use helpers::{
    SetupError, bearer_validator, configure_postgresql, get_postgres_pool, seed_sample_drink,
};
