//! Axum-specific update drink route.

use axum::{
    Extension,
    body::Bytes,
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::WithRejection;
use barista_adapters::{ApiError, handlers};
use barista_core::{AccessClaims, DrinkId, DrinkStore};

use crate::adapters::response_builder;

/// `PATCH /drinks/{id}`, behind the `patch:drinks` gate.
///
/// The body is passed on undecoded so an unknown id answers 404 before any
/// body error.
#[tracing::instrument(name = "Update drink", skip_all)]
pub async fn update_drink<S>(
    State(store): State<S>,
    Extension(claims): Extension<AccessClaims>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    body: Bytes,
) -> Result<Response, ApiError>
where
    S: DrinkStore + Clone + 'static,
{
    tracing::info!(subject = claims.subject(), id, "Updating drink");

    handlers::handle_update_drink(&store, DrinkId::new(id), &body, response_builder()).await
}
