//! Framework-agnostic create drink handler.

use barista_application::CreateDrinkUseCase;
use barista_core::{ApiResponseBuilder, ApiResponseHelpers, DrinkStore};

use super::DrinkPayload;
use crate::http::ApiError;

/// Handle `POST /drinks`.
///
/// # Arguments
/// * `store` - Drink store
/// * `payload` - Request body (already deserialized)
/// * `builder` - HTTP response builder
///
/// # Returns
/// The created drink in long form inside a one-element `drinks` list, or
/// `Unprocessable` when a field is missing, invalid or cannot be stored
pub async fn handle_create_drink<S, B>(
    store: &S,
    payload: DrinkPayload,
    builder: B,
) -> Result<B::Response, ApiError>
where
    S: DrinkStore,
    B: ApiResponseBuilder,
{
    let drink = CreateDrinkUseCase::new(store)
        .execute(payload.title, payload.recipe)
        .await?;

    Ok(builder.success(serde_json::json!({ "drinks": [drink.long()] })))
}
