use barista_core::{
    Drink, DrinkChanges, DrinkError, DrinkId, DrinkStore, DrinkStoreError, RecipeInput,
};

/// Error types for update drink use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateDrinkError {
    #[error("Invalid changes: {0}")]
    InvalidChanges(#[from] DrinkError),
    #[error("Drink store error: {0}")]
    DrinkStoreError(#[from] DrinkStoreError),
}

/// Update drink use case - overwrites the provided fields of an existing drink
pub struct UpdateDrinkUseCase<'a, S>
where
    S: DrinkStore,
{
    drink_store: &'a S,
}

impl<'a, S> UpdateDrinkUseCase<'a, S>
where
    S: DrinkStore,
{
    pub fn new(drink_store: &'a S) -> Self {
        Self { drink_store }
    }

    /// Execute the update drink use case
    ///
    /// # Arguments
    /// * `id` - Id of the drink to update
    /// * `title` - New title, kept when absent or blank
    /// * `recipe` - New recipe, kept when absent or empty
    ///
    /// # Returns
    /// The drink as stored after the update, or `DrinkNotFound` for an unknown id
    #[tracing::instrument(name = "UpdateDrinkUseCase::execute", skip(self, recipe))]
    pub async fn execute(
        &self,
        id: DrinkId,
        title: Option<String>,
        recipe: Option<RecipeInput>,
    ) -> Result<Drink, UpdateDrinkError> {
        let drink = self.find(id).await?;
        self.apply(drink, title, recipe).await
    }

    /// Look up the drink to update. Callers that still have to decode the
    /// requested changes run this first so an unknown id is reported before
    /// any payload error.
    #[tracing::instrument(name = "UpdateDrinkUseCase::find", skip(self))]
    pub async fn find(&self, id: DrinkId) -> Result<Drink, UpdateDrinkError> {
        Ok(self.drink_store.get_drink(id).await?)
    }

    /// Overwrite the provided fields of a drink returned by [`Self::find`].
    #[tracing::instrument(name = "UpdateDrinkUseCase::apply", skip_all, fields(id = %drink.id()))]
    pub async fn apply(
        &self,
        drink: Drink,
        title: Option<String>,
        recipe: Option<RecipeInput>,
    ) -> Result<Drink, UpdateDrinkError> {
        let changes = DrinkChanges::parse(title, recipe)?;
        if changes.is_empty() {
            return Ok(drink);
        }

        Ok(self.drink_store.update_drink(drink.apply(changes)).await?)
    }
}
