//! Axum-specific delete drink route.

use axum::{
    Extension,
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::WithRejection;
use barista_adapters::{ApiError, handlers};
use barista_core::{AccessClaims, DrinkId, DrinkStore};

use crate::adapters::response_builder;

/// `DELETE /drinks/{id}`, behind the `delete:drinks` gate.
#[tracing::instrument(name = "Delete drink", skip_all)]
pub async fn delete_drink<S>(
    State(store): State<S>,
    Extension(claims): Extension<AccessClaims>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<Response, ApiError>
where
    S: DrinkStore + Clone + 'static,
{
    tracing::info!(subject = claims.subject(), id, "Deleting drink");

    handlers::handle_delete_drink(&store, DrinkId::new(id), response_builder()).await
}
