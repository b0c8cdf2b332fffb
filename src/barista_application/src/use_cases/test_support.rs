use std::{collections::BTreeMap, sync::Arc};

use barista_core::{
    Drink, DrinkId, DrinkStore, DrinkStoreError, DrinkTitle, Ingredient, NewDrink, Recipe,
};
use tokio::sync::RwLock;

// Mock drink store shared by the use case tests
#[derive(Clone, Default)]
pub struct MockDrinkStore {
    pub drinks: Arc<RwLock<BTreeMap<DrinkId, Drink>>>,
    pub fail_with_unexpected: bool,
}

impl MockDrinkStore {
    pub fn failing() -> Self {
        Self {
            fail_with_unexpected: true,
            ..Self::default()
        }
    }

    pub async fn with_drink(self, id: i64, title: &str) -> Self {
        let drink = Drink::new(DrinkId::new(id), DrinkTitle::try_from(title).unwrap(), recipe());
        self.drinks.write().await.insert(drink.id(), drink);
        self
    }

    fn check_failure(&self) -> Result<(), DrinkStoreError> {
        if self.fail_with_unexpected {
            return Err(DrinkStoreError::UnexpectedError(
                "connection reset".to_owned(),
            ));
        }
        Ok(())
    }
}

pub fn recipe() -> Recipe {
    Recipe::try_from(vec![Ingredient::new("blue", "water", 1)]).unwrap()
}

#[async_trait::async_trait]
impl DrinkStore for MockDrinkStore {
    async fn list_drinks(&self) -> Result<Vec<Drink>, DrinkStoreError> {
        self.check_failure()?;
        Ok(self.drinks.read().await.values().cloned().collect())
    }

    async fn get_drink(&self, id: DrinkId) -> Result<Drink, DrinkStoreError> {
        self.drinks
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(DrinkStoreError::DrinkNotFound)
    }

    async fn add_drink(&self, drink: NewDrink) -> Result<Drink, DrinkStoreError> {
        self.check_failure()?;
        let mut drinks = self.drinks.write().await;
        if drinks.values().any(|d| d.title() == drink.title()) {
            return Err(DrinkStoreError::TitleAlreadyExists);
        }
        let next_id = drinks.keys().last().map_or(1, |id| id.value() + 1);
        let drink = drink.into_drink(DrinkId::new(next_id));
        drinks.insert(drink.id(), drink.clone());
        Ok(drink)
    }

    async fn update_drink(&self, drink: Drink) -> Result<Drink, DrinkStoreError> {
        self.check_failure()?;
        let mut drinks = self.drinks.write().await;
        let stored = drinks
            .get_mut(&drink.id())
            .ok_or(DrinkStoreError::DrinkNotFound)?;
        *stored = drink.clone();
        Ok(drink)
    }

    async fn delete_drink(&self, id: DrinkId) -> Result<(), DrinkStoreError> {
        self.check_failure()?;
        self.drinks
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(DrinkStoreError::DrinkNotFound)
    }
}
