//! Framework-agnostic delete drink handler.

use barista_application::DeleteDrinkUseCase;
use barista_core::{ApiResponseBuilder, ApiResponseHelpers, DrinkId, DrinkStore};

use crate::http::ApiError;

/// Handle `DELETE /drinks/{id}`, answering `{success: true, delete: <id>}`.
pub async fn handle_delete_drink<S, B>(
    store: &S,
    id: DrinkId,
    builder: B,
) -> Result<B::Response, ApiError>
where
    S: DrinkStore,
    B: ApiResponseBuilder,
{
    let deleted = DeleteDrinkUseCase::new(store).execute(id).await?;

    Ok(builder.success(serde_json::json!({ "delete": deleted })))
}
