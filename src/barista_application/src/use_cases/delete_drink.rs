use barista_core::{DrinkId, DrinkStore, DrinkStoreError};

/// Error types for delete drink use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteDrinkError {
    #[error("Drink store error: {0}")]
    DrinkStoreError(#[from] DrinkStoreError),
}

/// Delete drink use case - removes a drink from the menu
pub struct DeleteDrinkUseCase<'a, S>
where
    S: DrinkStore,
{
    drink_store: &'a S,
}

impl<'a, S> DeleteDrinkUseCase<'a, S>
where
    S: DrinkStore,
{
    pub fn new(drink_store: &'a S) -> Self {
        Self { drink_store }
    }

    /// Execute the delete drink use case
    ///
    /// # Returns
    /// The id of the removed drink, or `DrinkNotFound` for an unknown id
    #[tracing::instrument(name = "DeleteDrinkUseCase::execute", skip(self))]
    pub async fn execute(&self, id: DrinkId) -> Result<DrinkId, DeleteDrinkError> {
        self.drink_store.delete_drink(id).await?;

        Ok(id)
    }
}
