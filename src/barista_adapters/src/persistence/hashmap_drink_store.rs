use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use barista_core::{Drink, DrinkId, DrinkStore, DrinkStoreError, DrinkTitle, NewDrink};

#[derive(Default)]
struct Drinks {
    by_id: BTreeMap<DrinkId, Drink>,
    last_id: i64,
}

impl Drinks {
    fn title_taken(&self, title: &DrinkTitle, except: Option<DrinkId>) -> bool {
        self.by_id
            .values()
            .any(|drink| drink.title() == title && Some(drink.id()) != except)
    }
}

#[derive(Default, Clone)]
pub struct HashMapDrinkStore {
    drinks: Arc<RwLock<Drinks>>,
}

impl HashMapDrinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DrinkStore for HashMapDrinkStore {
    async fn list_drinks(&self) -> Result<Vec<Drink>, DrinkStoreError> {
        let drinks = self.drinks.read().await;
        Ok(drinks.by_id.values().cloned().collect())
    }

    async fn get_drink(&self, id: DrinkId) -> Result<Drink, DrinkStoreError> {
        let drinks = self.drinks.read().await;
        drinks
            .by_id
            .get(&id)
            .cloned()
            .ok_or(DrinkStoreError::DrinkNotFound)
    }

    async fn add_drink(&self, drink: NewDrink) -> Result<Drink, DrinkStoreError> {
        let mut drinks = self.drinks.write().await;
        if drinks.title_taken(drink.title(), None) {
            return Err(DrinkStoreError::TitleAlreadyExists);
        }

        drinks.last_id += 1;
        let drink = drink.into_drink(DrinkId::new(drinks.last_id));
        drinks.by_id.insert(drink.id(), drink.clone());
        Ok(drink)
    }

    async fn update_drink(&self, drink: Drink) -> Result<Drink, DrinkStoreError> {
        let mut drinks = self.drinks.write().await;
        if drinks.title_taken(drink.title(), Some(drink.id())) {
            return Err(DrinkStoreError::TitleAlreadyExists);
        }

        let stored = drinks
            .by_id
            .get_mut(&drink.id())
            .ok_or(DrinkStoreError::DrinkNotFound)?;
        *stored = drink.clone();
        Ok(drink)
    }

    async fn delete_drink(&self, id: DrinkId) -> Result<(), DrinkStoreError> {
        let mut drinks = self.drinks.write().await;
        drinks
            .by_id
            .remove(&id)
            .ok_or(DrinkStoreError::DrinkNotFound)?;
        Ok(())
    }
}
