use barista_core::{
    Drink, DrinkId, DrinkStore, DrinkStoreError, DrinkTitle, Ingredient, NewDrink, Recipe,
};
use sqlx::{FromRow, PgPool};

pub struct PostgresDrinkStore {
    pool: PgPool,
}

impl PostgresDrinkStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresDrinkStore { pool }
    }
}

impl Clone for PostgresDrinkStore {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}

#[derive(FromRow)]
struct DrinkRow {
    id: i64,
    title: String,
    recipe: String,
}

impl TryFrom<DrinkRow> for Drink {
    type Error = DrinkStoreError;

    fn try_from(row: DrinkRow) -> Result<Self, Self::Error> {
        let title = DrinkTitle::try_from(row.title)
            .map_err(|e| DrinkStoreError::UnexpectedError(e.to_string()))?;
        let ingredients: Vec<Ingredient> = serde_json::from_str(&row.recipe)
            .map_err(|e| DrinkStoreError::UnexpectedError(e.to_string()))?;
        let recipe = Recipe::try_from(ingredients)
            .map_err(|e| DrinkStoreError::UnexpectedError(e.to_string()))?;

        Ok(Drink::new(DrinkId::new(row.id), title, recipe))
    }
}

fn recipe_json(recipe: &Recipe) -> Result<String, DrinkStoreError> {
    serde_json::to_string(recipe).map_err(|e| DrinkStoreError::UnexpectedError(e.to_string()))
}

fn write_error(error: sqlx::Error) -> DrinkStoreError {
    if let Some(db_err) = error.as_database_error() {
        if db_err.is_unique_violation() {
            return DrinkStoreError::TitleAlreadyExists;
        }
    }
    DrinkStoreError::UnexpectedError(error.to_string())
}

#[async_trait::async_trait]
impl DrinkStore for PostgresDrinkStore {
    #[tracing::instrument(name = "Listing drinks from PostgreSQL", skip_all)]
    async fn list_drinks(&self) -> Result<Vec<Drink>, DrinkStoreError> {
        let rows = sqlx::query_as::<_, DrinkRow>(
            r#"
                SELECT id, title, recipe
                FROM drinks
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DrinkStoreError::UnexpectedError(e.to_string()))?;

        rows.into_iter().map(Drink::try_from).collect()
    }

    #[tracing::instrument(name = "Retrieving drink from PostgreSQL", skip_all)]
    async fn get_drink(&self, id: DrinkId) -> Result<Drink, DrinkStoreError> {
        let row = sqlx::query_as::<_, DrinkRow>(
            r#"
                SELECT id, title, recipe
                FROM drinks
                WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DrinkStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(DrinkStoreError::DrinkNotFound);
        };

        row.try_into()
    }

    #[tracing::instrument(name = "Adding drink to PostgreSQL", skip_all)]
    async fn add_drink(&self, drink: NewDrink) -> Result<Drink, DrinkStoreError> {
        let recipe = recipe_json(drink.recipe())?;

        let id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO drinks (title, recipe)
                VALUES ($1, $2)
                RETURNING id
            "#,
        )
        .bind(drink.title().as_ref())
        .bind(recipe)
        .fetch_one(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(drink.into_drink(DrinkId::new(id)))
    }

    #[tracing::instrument(name = "Updating drink in PostgreSQL", skip_all)]
    async fn update_drink(&self, drink: Drink) -> Result<Drink, DrinkStoreError> {
        let recipe = recipe_json(drink.recipe())?;

        let result = sqlx::query(
            r#"
                UPDATE drinks
                SET title = $1, recipe = $2
                WHERE id = $3
            "#,
        )
        .bind(drink.title().as_ref())
        .bind(recipe)
        .bind(drink.id().value())
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        if result.rows_affected() == 0 {
            return Err(DrinkStoreError::DrinkNotFound);
        }

        Ok(drink)
    }

    #[tracing::instrument(name = "Deleting drink from PostgreSQL", skip_all)]
    async fn delete_drink(&self, id: DrinkId) -> Result<(), DrinkStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM drinks
                WHERE id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await
        .map_err(|e| DrinkStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DrinkStoreError::DrinkNotFound);
        }

        Ok(())
    }
}
