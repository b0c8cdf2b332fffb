use async_trait::async_trait;
use thiserror::Error;

use crate::domain::drink::{Drink, DrinkId, NewDrink};

// DrinkStore port trait and errors
#[derive(Debug, Error)]
pub enum DrinkStoreError {
    #[error("Drink not found")]
    DrinkNotFound,
    #[error("A drink with this title already exists")]
    TitleAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for DrinkStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::DrinkNotFound, Self::DrinkNotFound)
                | (Self::TitleAlreadyExists, Self::TitleAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait DrinkStore: Send + Sync {
    /// All drinks, ordered by ascending id.
    async fn list_drinks(&self) -> Result<Vec<Drink>, DrinkStoreError>;
    async fn get_drink(&self, id: DrinkId) -> Result<Drink, DrinkStoreError>;
    /// Stores the drink under a freshly assigned id.
    async fn add_drink(&self, drink: NewDrink) -> Result<Drink, DrinkStoreError>;
    /// Replaces the stored drink that has the same id.
    async fn update_drink(&self, drink: Drink) -> Result<Drink, DrinkStoreError>;
    async fn delete_drink(&self, id: DrinkId) -> Result<(), DrinkStoreError>;
}
