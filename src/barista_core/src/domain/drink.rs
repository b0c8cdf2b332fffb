use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::drink_view::{LongDrink, ShortDrink};

pub const MAX_TITLE_LENGTH: usize = 80;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrinkError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Title must be at most {MAX_TITLE_LENGTH} characters")]
    TitleTooLong,
    #[error("Recipe must contain at least one ingredient")]
    EmptyRecipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrinkId(i64);

impl DrinkId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for DrinkId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for DrinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A trimmed, non-empty drink title of at most [`MAX_TITLE_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DrinkTitle(String);

impl TryFrom<String> for DrinkTitle {
    type Error = DrinkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DrinkError::EmptyTitle);
        }
        if trimmed.chars().count() > MAX_TITLE_LENGTH {
            return Err(DrinkError::TitleTooLong);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl TryFrom<&str> for DrinkTitle {
    type Error = DrinkError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl AsRef<str> for DrinkTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrinkTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub color: String,
    pub name: String,
    pub parts: u32,
}

impl Ingredient {
    pub fn new(color: impl Into<String>, name: impl Into<String>, parts: u32) -> Self {
        Self {
            color: color.into(),
            name: name.into(),
            parts,
        }
    }
}

/// Ordered, non-empty list of ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Recipe(Vec<Ingredient>);

impl Recipe {
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.0
    }

    pub fn into_ingredients(self) -> Vec<Ingredient> {
        self.0
    }
}

impl TryFrom<Vec<Ingredient>> for Recipe {
    type Error = DrinkError;

    fn try_from(ingredients: Vec<Ingredient>) -> Result<Self, Self::Error> {
        if ingredients.is_empty() {
            return Err(DrinkError::EmptyRecipe);
        }
        Ok(Self(ingredients))
    }
}

/// Recipe as it arrives in a request body: clients send either a single
/// ingredient object or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(ingredients) => ingredients,
            RecipeInput::One(ingredient) => vec![ingredient],
        }
    }
}

impl TryFrom<RecipeInput> for Recipe {
    type Error = DrinkError;

    fn try_from(input: RecipeInput) -> Result<Self, Self::Error> {
        Recipe::try_from(input.into_ingredients())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    id: DrinkId,
    title: DrinkTitle,
    recipe: Recipe,
}

impl Drink {
    pub fn new(id: DrinkId, title: DrinkTitle, recipe: Recipe) -> Self {
        Self { id, title, recipe }
    }

    pub fn id(&self) -> DrinkId {
        self.id
    }

    pub fn title(&self) -> &DrinkTitle {
        &self.title
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Public projection: colors and parts only, no ingredient names.
    pub fn short(&self) -> ShortDrink {
        ShortDrink::from(self)
    }

    /// Full projection including ingredient names.
    pub fn long(&self) -> LongDrink {
        LongDrink::from(self)
    }

    pub fn apply(self, changes: DrinkChanges) -> Self {
        Self {
            id: self.id,
            title: changes.title.unwrap_or(self.title),
            recipe: changes.recipe.unwrap_or(self.recipe),
        }
    }
}

/// A validated drink that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    title: DrinkTitle,
    recipe: Recipe,
}

impl NewDrink {
    pub fn new(title: DrinkTitle, recipe: Recipe) -> Self {
        Self { title, recipe }
    }

    /// Both fields are required; nothing is built unless both validate.
    pub fn parse(title: Option<String>, recipe: Option<RecipeInput>) -> Result<Self, DrinkError> {
        let title = title.ok_or(DrinkError::MissingField("title"))?;
        let recipe = recipe.ok_or(DrinkError::MissingField("recipe"))?;

        Ok(Self {
            title: DrinkTitle::try_from(title)?,
            recipe: Recipe::try_from(recipe)?,
        })
    }

    pub fn title(&self) -> &DrinkTitle {
        &self.title
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn into_drink(self, id: DrinkId) -> Drink {
        Drink::new(id, self.title, self.recipe)
    }
}

/// Partial update of a drink. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrinkChanges {
    pub title: Option<DrinkTitle>,
    pub recipe: Option<Recipe>,
}

impl DrinkChanges {
    /// Blank titles and empty recipes count as not provided.
    pub fn parse(title: Option<String>, recipe: Option<RecipeInput>) -> Result<Self, DrinkError> {
        let title = match title {
            Some(title) if !title.trim().is_empty() => Some(DrinkTitle::try_from(title)?),
            _ => None,
        };

        let recipe = recipe
            .map(RecipeInput::into_ingredients)
            .filter(|ingredients| !ingredients.is_empty())
            .map(Recipe::try_from)
            .transpose()?;

        Ok(Self { title, recipe })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.recipe.is_none()
    }
}
