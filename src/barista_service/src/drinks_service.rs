use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
};
use barista_adapters::config::AllowedOrigins;
use barista_axum::{
    PermissionGate, require_permission,
    routes::{
        create_drink, delete_drink, drinks_detail, list_drinks, method_not_allowed, not_found,
        update_drink,
    },
};
use barista_core::{
    AccessClaims, AuthValidator, DELETE_DRINKS, DrinkStore, GET_DRINKS_DETAIL, PATCH_DRINKS,
    POST_DRINKS, TokenError,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The drinks menu API with its permission-gated routes
pub struct DrinksService {
    router: Router,
}

impl DrinksService {
    /// Create a new DrinksService with the provided store and token validator
    ///
    /// # Arguments
    /// * `drink_store` - Store for drinks (must be Clone)
    /// * `validator` - Bearer token validator shared by every gated route
    ///
    /// # Note on Architecture
    /// Every protected route gets its own gate carrying the permission it
    /// requires; the public listing has none.
    pub fn new<S, V>(drink_store: S, validator: V) -> Self
    where
        S: DrinkStore + Clone + 'static,
        V: AuthValidator<Claims = AccessClaims, Error = TokenError, RequestParts = request::Parts>,
    {
        let gate = |permission| {
            from_fn_with_state(
                PermissionGate::new(validator.clone(), permission),
                require_permission::<V>,
            )
        };

        let router = Router::new()
            .route(
                "/drinks",
                get(list_drinks::<S>)
                    .merge(post(create_drink::<S>).route_layer(gate(POST_DRINKS))),
            )
            .route(
                "/drinks-detail",
                get(drinks_detail::<S>).route_layer(gate(GET_DRINKS_DETAIL)),
            )
            .route(
                "/drinks/{id}",
                patch(update_drink::<S>)
                    .route_layer(gate(PATCH_DRINKS))
                    .merge(delete(delete_drink::<S>).route_layer(gate(DELETE_DRINKS))),
            )
            .method_not_allowed_fallback(method_not_allowed)
            .fallback(not_found)
            .with_state(drink_store);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the DrinksService into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins; CORS stays off when
    ///   absent or empty
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the drinks service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Drinks service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
