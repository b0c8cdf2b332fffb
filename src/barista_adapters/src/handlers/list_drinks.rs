//! Framework-agnostic public menu handler.

use barista_application::ListDrinksUseCase;
use barista_core::{ApiResponseBuilder, ApiResponseHelpers, DrinkStore, ShortDrink};

use crate::http::ApiError;

/// Handle `GET /drinks`: every drink in short form, no ingredient names.
pub async fn handle_list_drinks<S, B>(store: &S, builder: B) -> Result<B::Response, ApiError>
where
    S: DrinkStore,
    B: ApiResponseBuilder,
{
    let drinks = ListDrinksUseCase::new(store).execute().await?;
    let drinks: Vec<ShortDrink> = drinks.iter().map(|drink| drink.short()).collect();

    Ok(builder.success(serde_json::json!({ "drinks": drinks })))
}
