//! Axum-specific create drink route.

use axum::{Extension, Json, extract::State, response::Response};
use axum_extra::extract::WithRejection;
use barista_adapters::{ApiError, handlers, handlers::DrinkPayload};
use barista_core::{AccessClaims, DrinkStore};

use crate::adapters::response_builder;

/// `POST /drinks`, behind the `post:drinks` gate.
///
/// Invalid JSON is rejected with 400 and JSON of the wrong shape with 422
/// before the handler runs.
#[tracing::instrument(name = "Create drink", skip_all)]
pub async fn create_drink<S>(
    State(store): State<S>,
    Extension(claims): Extension<AccessClaims>,
    WithRejection(Json(payload), _): WithRejection<Json<DrinkPayload>, ApiError>,
) -> Result<Response, ApiError>
where
    S: DrinkStore + Clone + 'static,
{
    tracing::info!(subject = claims.subject(), "Creating drink");

    handlers::handle_create_drink(&store, payload, response_builder()).await
}
