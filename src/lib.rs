//! # Barista - Drinks Menu API Library
//!
//! This is a facade crate that re-exports all public APIs from the drinks service components.
//! Use this crate to get access to the whole drinks API in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! barista = { path = "../barista" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Drink`, `Recipe`, `Permission`, `AccessClaims`, etc.
//! - **Repository traits**: `DrinkStore`
//! - **Use cases**: `CreateDrinkUseCase`, `AuthorizeUseCase`, etc.
//! - **Adapters**: `HashMapDrinkStore`, `PostgresDrinkStore`, `BearerJwtValidator`, etc.
//! - **Service**: `DrinksService` - The main entry point for the drinks API

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use barista_core::*;
}

// Re-export most commonly used core types at the root level
pub use barista_core::{
    AccessClaims, DELETE_DRINKS, Drink, DrinkError, DrinkId, DrinkTitle, GET_DRINKS_DETAIL,
    Ingredient, NewDrink, PATCH_DRINKS, POST_DRINKS, Permission, PermissionError, Recipe,
    TokenError,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use barista_core::{DrinkStore, DrinkStoreError};
}

// Re-export repository traits at root level
pub use barista_core::{AuthValidator, DrinkStore, DrinkStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use barista_application::*;
}

// Re-export use cases at root level
pub use barista_application::{
    AuthorizeUseCase, CreateDrinkUseCase, DeleteDrinkUseCase, ListDrinksUseCase,
    UpdateDrinkUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP errors and response traits
    pub mod http {
        pub use barista_adapters::http::*;
    }

    /// Framework-agnostic handlers
    pub mod handlers {
        pub use barista_adapters::handlers::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use barista_adapters::persistence::*;
    }

    /// Bearer token validation and signing key sets
    pub mod auth {
        pub use barista_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use barista_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use barista_adapters::{
    ApiError, BearerJwtValidator, CachedJwkSet, RemoteJwkSet, StaticJwkSet,
    persistence::{HashMapDrinkStore, PostgresDrinkStore},
};

// ============================================================================
// Axum integration
// ============================================================================

/// Axum routes, gate middleware and response builder
pub mod axum_integration {
    pub use barista_axum::*;
}

// ============================================================================
// Drinks Service (Main Entry Point)
// ============================================================================

/// Main drinks service
pub use barista_service::{
    DrinksService, SetupError, bearer_validator, configure_postgresql, get_postgres_pool,
    seed_sample_drink,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
