mod auth;
mod create_drink;
mod delete_drink;
mod helpers;
