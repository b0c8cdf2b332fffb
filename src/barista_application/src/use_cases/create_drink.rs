use barista_core::{Drink, DrinkError, DrinkStore, DrinkStoreError, NewDrink, RecipeInput};

/// Error types for create drink use case
#[derive(Debug, thiserror::Error)]
pub enum CreateDrinkError {
    #[error("Invalid drink: {0}")]
    InvalidDrink(#[from] DrinkError),
    #[error("Drink store error: {0}")]
    DrinkStoreError(#[from] DrinkStoreError),
}

/// Create drink use case - validates the drink, then stores it
pub struct CreateDrinkUseCase<'a, S>
where
    S: DrinkStore,
{
    drink_store: &'a S,
}

impl<'a, S> CreateDrinkUseCase<'a, S>
where
    S: DrinkStore,
{
    pub fn new(drink_store: &'a S) -> Self {
        Self { drink_store }
    }

    /// Execute the create drink use case
    ///
    /// # Arguments
    /// * `title` - Title from the request body, if present
    /// * `recipe` - Recipe from the request body, if present
    ///
    /// # Returns
    /// The stored drink with its assigned id. The store is not touched unless
    /// both fields are present and valid.
    #[tracing::instrument(name = "CreateDrinkUseCase::execute", skip(self, recipe))]
    pub async fn execute(
        &self,
        title: Option<String>,
        recipe: Option<RecipeInput>,
    ) -> Result<Drink, CreateDrinkError> {
        let new_drink = NewDrink::parse(title, recipe)?;

        Ok(self.drink_store.add_drink(new_drink).await?)
    }
}
