//! JSON projections of a [`Drink`].

use serde::Serialize;

use super::drink::{Drink, DrinkId, DrinkTitle, Ingredient};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

/// Public form of a drink. Ingredient names are never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortDrink {
    pub id: DrinkId,
    pub title: DrinkTitle,
    pub recipe: Vec<ShortIngredient>,
}

impl From<&Drink> for ShortDrink {
    fn from(drink: &Drink) -> Self {
        let recipe = drink
            .recipe()
            .ingredients()
            .iter()
            .map(|ingredient| ShortIngredient {
                color: ingredient.color.clone(),
                parts: ingredient.parts,
            })
            .collect();

        Self {
            id: drink.id(),
            title: drink.title().clone(),
            recipe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongDrink {
    pub id: DrinkId,
    pub title: DrinkTitle,
    pub recipe: Vec<Ingredient>,
}

impl From<&Drink> for LongDrink {
    fn from(drink: &Drink) -> Self {
        Self {
            id: drink.id(),
            title: drink.title().clone(),
            recipe: drink.recipe().ingredients().to_vec(),
        }
    }
}
