//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic handlers, and return Axum responses.

pub mod create_drink;
pub mod delete_drink;
pub mod drinks_detail;
pub mod fallback;
pub mod list_drinks;
pub mod update_drink;

pub use create_drink::create_drink;
pub use delete_drink::delete_drink;
pub use drinks_detail::drinks_detail;
pub use fallback::{method_not_allowed, not_found};
pub use list_drinks::list_drinks;
pub use update_drink::update_drink;
