//! Framework-agnostic detailed menu handler.

use barista_application::ListDrinksUseCase;
use barista_core::{ApiResponseBuilder, ApiResponseHelpers, DrinkStore, LongDrink};

use crate::http::ApiError;

/// Handle `GET /drinks-detail`: every drink in long form.
///
/// The permission gate runs before this handler; it never sees a request
/// without `get:drinks-detail`.
pub async fn handle_list_drink_details<S, B>(
    store: &S,
    builder: B,
) -> Result<B::Response, ApiError>
where
    S: DrinkStore,
    B: ApiResponseBuilder,
{
    let drinks = ListDrinksUseCase::new(store).execute().await?;
    let drinks: Vec<LongDrink> = drinks.iter().map(|drink| drink.long()).collect();

    Ok(builder.success(serde_json::json!({ "drinks": drinks })))
}
