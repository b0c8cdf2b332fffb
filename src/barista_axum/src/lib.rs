//! Axum integration for the drinks API.
//!
//! This crate provides the Axum adapters for the framework-agnostic handlers
//! defined in `barista_adapters`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  barista_core: HTTP trait definitions    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  barista_axum: Axum implementations      │
//! │  - AxumResponseBuilder                   │
//! │  - Permission gate middleware            │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, middleware::from_fn_with_state, routing::post};
//! use barista_axum::{PermissionGate, require_permission, routes};
//!
//! let app = Router::new()
//!     .route(
//!         "/drinks",
//!         post(routes::create_drink::<HashMapDrinkStore>).route_layer(from_fn_with_state(
//!             PermissionGate::new(validator, POST_DRINKS),
//!             require_permission,
//!         )),
//!     )
//!     .with_state(store);
//! ```

pub mod adapters;
pub mod middleware;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumResponseBuilder, response_builder};
pub use middleware::{PermissionGate, require_permission};
