pub mod domain;
pub mod http_abstraction;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    claims::AccessClaims,
    drink::{
        Drink, DrinkChanges, DrinkError, DrinkId, DrinkTitle, Ingredient, MAX_TITLE_LENGTH,
        NewDrink, Recipe, RecipeInput,
    },
    drink_view::{LongDrink, ShortDrink, ShortIngredient},
    permission::{
        DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS, Permission, PermissionError,
    },
    token_error::TokenError,
};

pub use ports::repositories::{DrinkStore, DrinkStoreError};

pub use strategies::auth_validator::AuthValidator;

pub use http_abstraction::{
    AUTHORIZATION_HEADER, ApiResponseBuilder, ApiResponseHelpers, AuthRequest, parse_bearer,
};
