pub mod hashmap_drink_store;
pub mod postgres_drink_store;

pub use hashmap_drink_store::HashMapDrinkStore;
pub use postgres_drink_store::PostgresDrinkStore;
