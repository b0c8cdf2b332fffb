//! Framework-agnostic update drink handler.

use barista_application::UpdateDrinkUseCase;
use barista_core::{ApiResponseBuilder, ApiResponseHelpers, DrinkId, DrinkStore};

use super::DrinkPayload;
use crate::http::ApiError;

/// Handle `PATCH /drinks/{id}`: overwrite the fields present in the payload.
///
/// The body arrives undecoded. The drink is looked up first, so an unknown id
/// answers `NotFound` whatever the body holds.
///
/// # Returns
/// The updated drink in long form inside a one-element `drinks` list,
/// `NotFound` when no drink has this id, `BadRequest` for a body that is not
/// JSON and `Unprocessable` for JSON of the wrong shape
pub async fn handle_update_drink<S, B>(
    store: &S,
    id: DrinkId,
    body: &[u8],
    builder: B,
) -> Result<B::Response, ApiError>
where
    S: DrinkStore,
    B: ApiResponseBuilder,
{
    let use_case = UpdateDrinkUseCase::new(store);

    let drink = use_case.find(id).await?;
    let payload = DrinkPayload::from_json(body)?;
    let drink = use_case
        .apply(drink, payload.title, payload.recipe)
        .await?;

    Ok(builder.success(serde_json::json!({ "drinks": [drink.long()] })))
}
