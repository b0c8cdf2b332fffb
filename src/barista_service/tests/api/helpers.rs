use std::time::Duration;

use barista_adapters::{
    BearerJwtValidator, CachedJwkSet, HashMapDrinkStore, JwtValidationConfig, RemoteJwkSet,
};
use barista_core::{Drink, DrinkStore, DrinkTitle, Ingredient, NewDrink, Recipe};
use barista_service::DrinksService;
use fake::{Fake, faker::lorem::en::Words};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const ISSUER: &str = "https://barista.test/";
pub const AUDIENCE: &str = "drinks";
pub const JWKS_PATH: &str = "/.well-known/jwks.json";

pub const PRIMARY_KID: &str = "primary-key";
pub const ROTATED_KID: &str = "rotated-key";

pub const PRIMARY_PEM: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../fixtures/jwt/primary.pem"
));
pub const ROTATED_PEM: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../fixtures/jwt/rotated.pem"
));
pub const JWKS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../fixtures/jwt/jwks.json"
));
pub const JWKS_ROTATED: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../fixtures/jwt/jwks_rotated.json"
));

pub fn jwks_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub drink_store: HashMapDrinkStore,
    pub jwks_server: MockServer,
}

impl TestApp {
    /// Spawn the service with a signing authority serving the primary key set.
    pub async fn new() -> Self {
        let jwks_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(JWKS_PATH))
            .respond_with(jwks_response(JWKS))
            .mount(&jwks_server)
            .await;

        Self::with_jwks_server(jwks_server).await
    }

    /// Spawn the service against a signing authority whose mocks the caller mounted.
    pub async fn with_jwks_server(jwks_server: MockServer) -> Self {
        let remote = RemoteJwkSet::new(
            format!("{}{}", jwks_server.uri(), JWKS_PATH),
            Duration::from_secs(2),
        )
        .expect("Failed to build key set client");

        let validator = BearerJwtValidator::new(
            CachedJwkSet::new(remote, Duration::from_secs(600)),
            JwtValidationConfig {
                issuer: ISSUER.to_owned(),
                audience: AUDIENCE.to_owned(),
                algorithms: vec![Algorithm::RS256],
                leeway_in_seconds: 0,
            },
        );

        let drink_store = HashMapDrinkStore::new();
        let router = DrinksService::new(drink_store.clone(), validator).as_nested_router(None);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Failed to run app");
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
            drink_store,
            jwks_server,
        }
    }

    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.address, route)
    }

    pub async fn get_drinks(&self) -> reqwest::Response {
        self.http_client
            .get(self.url("/drinks"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_drinks_detail(&self, token: Option<&str>) -> reqwest::Response {
        with_bearer(self.http_client.get(self.url("/drinks-detail")), token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_drink(&self, token: Option<&str>, body: &Value) -> reqwest::Response {
        with_bearer(self.http_client.post(self.url("/drinks")), token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_raw_drink(&self, token: &str, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(self.url("/drinks"))
            .bearer_auth(token)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch_drink(&self, token: Option<&str>, id: &str, body: &Value) -> reqwest::Response {
        with_bearer(self.http_client.patch(self.url(&format!("/drinks/{id}"))), token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_drink(&self, token: Option<&str>, id: &str) -> reqwest::Response {
        with_bearer(self.http_client.delete(self.url(&format!("/drinks/{id}"))), token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Insert a drink straight into the store, bypassing the API.
    pub async fn seed_drink(&self, title: &str, recipe: Vec<Ingredient>) -> Drink {
        let drink = NewDrink::new(
            DrinkTitle::try_from(title).expect("Invalid seed title"),
            Recipe::try_from(recipe).expect("Invalid seed recipe"),
        );
        self.drink_store
            .add_drink(drink)
            .await
            .expect("Failed to seed drink")
    }

    pub async fn stored_drinks(&self) -> Vec<Drink> {
        self.drink_store
            .list_drinks()
            .await
            .expect("Failed to list drinks")
    }
}

fn with_bearer(request: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

pub fn random_title() -> String {
    let words: Vec<String> = Words(2..4).fake();
    format!("{} {}", words.join(" "), uuid_suffix())
}

fn uuid_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_owned()
}

pub fn claims(permissions: &[&str]) -> Value {
    json!({
        "sub": "auth0|barista",
        "iss": ISSUER,
        "aud": AUDIENCE,
        "iat": chrono::Utc::now().timestamp(),
        "exp": chrono::Utc::now().timestamp() + 3600,
        "permissions": permissions,
    })
}

pub fn sign(claims: &Value, kid: &str, pem: &[u8]) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_owned());
    let key = EncodingKey::from_rsa_pem(pem).expect("Invalid signing key");
    encode(&header, claims, &key).expect("Failed to sign token")
}

/// Token signed by the primary key carrying the given permissions.
pub fn token_with(permissions: &[&str]) -> String {
    sign(&claims(permissions), PRIMARY_KID, PRIMARY_PEM)
}

/// Token carrying every permission the API knows about.
pub fn manager_token() -> String {
    token_with(&[
        "get:drinks-detail",
        "post:drinks",
        "patch:drinks",
        "delete:drinks",
    ])
}

pub async fn body_json(response: reqwest::Response) -> Value {
    response
        .json()
        .await
        .expect("Response body is not JSON")
}

pub fn error_envelope(code: u16, message: &str) -> Value {
    json!({ "success": false, "error": code, "message": message })
}

pub fn latte_recipe() -> Value {
    json!([
        { "color": "brown", "name": "espresso", "parts": 1 },
        { "color": "white", "name": "steamed milk", "parts": 3 }
    ])
}
