pub mod auth_validator;
