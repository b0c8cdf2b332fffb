use barista_core::{Drink, DrinkStore, DrinkStoreError};

/// Error types for list drinks use case
#[derive(Debug, thiserror::Error)]
pub enum ListDrinksError {
    #[error("Drink store error: {0}")]
    DrinkStoreError(#[from] DrinkStoreError),
}

/// List drinks use case - reads the whole menu
///
/// Projection to the short or long form is left to the caller.
pub struct ListDrinksUseCase<'a, S>
where
    S: DrinkStore,
{
    drink_store: &'a S,
}

impl<'a, S> ListDrinksUseCase<'a, S>
where
    S: DrinkStore,
{
    pub fn new(drink_store: &'a S) -> Self {
        Self { drink_store }
    }

    #[tracing::instrument(name = "ListDrinksUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<Drink>, ListDrinksError> {
        Ok(self.drink_store.list_drinks().await?)
    }
}
