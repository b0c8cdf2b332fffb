//! Axum-specific public menu route.

use axum::{extract::State, response::Response};
use barista_adapters::{ApiError, handlers};
use barista_core::DrinkStore;

use crate::adapters::response_builder;

/// `GET /drinks`, open to everyone.
#[tracing::instrument(name = "List drinks", skip(store))]
pub async fn list_drinks<S>(State(store): State<S>) -> Result<Response, ApiError>
where
    S: DrinkStore + Clone + 'static,
{
    handlers::handle_list_drinks(&store, response_builder()).await
}
