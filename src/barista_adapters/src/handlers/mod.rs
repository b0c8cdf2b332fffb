//! Framework-agnostic drink handlers.
//!
//! These handlers run the use cases and shape the `{success, ...}` JSON bodies
//! without any framework dependencies. Framework-specific routes extract data
//! from requests, call these handlers, and return the built response.

pub mod create_drink;
pub mod delete_drink;
pub mod list_drink_details;
pub mod list_drinks;
pub mod update_drink;


use barista_core::RecipeInput;
use serde::Deserialize;

pub use create_drink::handle_create_drink;
pub use delete_drink::handle_delete_drink;
pub use list_drink_details::handle_list_drink_details;
pub use list_drinks::handle_list_drinks;
pub use update_drink::handle_update_drink;

/// Body of create and update requests. Both fields are optional on the wire;
/// the use cases decide which ones are required.
#[derive(Debug, Default, Deserialize)]
pub struct DrinkPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub recipe: Option<RecipeInput>,
}

impl DrinkPayload {
    /// Decode a raw request body.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
