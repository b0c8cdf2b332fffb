//! Axum implementation of the framework-neutral response builder.
//!
//! The trait is defined in `barista_core`; the handlers in `barista_adapters`
//! are generic over it and this newtype turns their output into an Axum
//! response.

use axum::body::Body;
use axum::http::{Response, StatusCode};
use barista_core::ApiResponseBuilder;

/// Newtype wrapper around Axum's response builder.
///
/// Allows implementing `barista_core::ApiResponseBuilder` without violating
/// the orphan rule.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    /// Create a new Axum response builder
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build response");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

/// Helper function to create an Axum response builder
///
/// ```ignore
/// async fn list(State(store): State<S>) -> Result<Response, ApiError> {
///     handlers::handle_list_drinks(&store, response_builder()).await
/// }
/// ```
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
