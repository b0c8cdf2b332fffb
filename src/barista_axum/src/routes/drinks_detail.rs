//! Axum-specific detailed menu route.

use axum::{Extension, extract::State, response::Response};
use barista_adapters::{ApiError, handlers};
use barista_core::{AccessClaims, DrinkStore};

use crate::adapters::response_builder;

/// `GET /drinks-detail`, behind the `get:drinks-detail` gate.
#[tracing::instrument(name = "List drink details", skip_all)]
pub async fn drinks_detail<S>(
    State(store): State<S>,
    Extension(claims): Extension<AccessClaims>,
) -> Result<Response, ApiError>
where
    S: DrinkStore + Clone + 'static,
{
    tracing::debug!(subject = claims.subject(), "Listing drink details");

    handlers::handle_list_drink_details(&store, response_builder()).await
}
