pub mod claims;
pub mod drink;
pub mod drink_view;
pub mod permission;
pub mod token_error;
