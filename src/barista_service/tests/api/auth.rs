use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::helpers::{
    JWKS, JWKS_PATH, JWKS_ROTATED, PRIMARY_KID, PRIMARY_PEM, ROTATED_KID, ROTATED_PEM, TestApp,
    body_json, claims, error_envelope, jwks_response, latte_recipe, random_title, sign,
};

fn new_drink() -> serde_json::Value {
    json!({ "title": random_title(), "recipe": latte_recipe() })
}

async fn post_with_authorization(app: &TestApp, authorization: Option<&str>) -> reqwest::Response {
    let mut request = app.http_client.post(app.url("/drinks")).json(&new_drink());
    if let Some(value) = authorization {
        request = request.header("authorization", value);
    }
    request.send().await.expect("Failed to execute request")
}

#[tokio::test]
async fn should_return_401_for_malformed_authorization() {
    let app = TestApp::new().await;
    let valid = sign(&claims(&["post:drinks"]), PRIMARY_KID, PRIMARY_PEM);

    let cases = [
        None,
        Some("Bearer".to_owned()),
        Some("Bearer ".to_owned()),
        Some(format!("Basic {valid}")),
        Some(format!("Bearer {valid} extra")),
        Some("Bearer not-a-jwt".to_owned()),
    ];

    for case in cases {
        let response = post_with_authorization(&app, case.as_deref()).await;

        assert_eq!(response.status().as_u16(), 401, "Failed for input: {case:?}");
        assert_eq!(body_json(response).await, error_envelope(401, "unauthorized"));
    }

    assert!(app.stored_drinks().await.is_empty());
}

#[tokio::test]
async fn should_return_401_for_rejected_claims() {
    let app = TestApp::new().await;

    let mut expired = claims(&["post:drinks"]);
    expired["exp"] = json!(chrono::Utc::now().timestamp() - 60);

    let mut wrong_issuer = claims(&["post:drinks"]);
    wrong_issuer["iss"] = json!("https://someone-else.test/");

    let mut wrong_audience = claims(&["post:drinks"]);
    wrong_audience["aud"] = json!("payments");

    let mut not_yet_valid = claims(&["post:drinks"]);
    not_yet_valid["nbf"] = json!(chrono::Utc::now().timestamp() + 600);

    let mut without_permissions = claims(&[]);
    without_permissions
        .as_object_mut()
        .expect("Claims are an object")
        .remove("permissions");

    let cases = [
        ("expired", expired),
        ("wrong issuer", wrong_issuer),
        ("wrong audience", wrong_audience),
        ("not yet valid", not_yet_valid),
        ("no permissions claim", without_permissions),
        ("insufficient scope", claims(&["get:drinks-detail"])),
    ];

    for (name, claims) in cases {
        let token = sign(&claims, PRIMARY_KID, PRIMARY_PEM);
        let response = post_with_authorization(&app, Some(&format!("Bearer {token}"))).await;

        assert_eq!(response.status().as_u16(), 401, "Failed for case: {name}");
    }

    assert!(app.stored_drinks().await.is_empty());
}

#[tokio::test]
async fn should_return_401_for_bad_signature() {
    let app = TestApp::new().await;

    // Signed with the rotated key but claiming to be the primary key.
    let forged = sign(&claims(&["post:drinks"]), PRIMARY_KID, ROTATED_PEM);
    let response = post_with_authorization(&app, Some(&format!("Bearer {forged}"))).await;
    assert_eq!(response.status().as_u16(), 401);

    let valid = sign(&claims(&["post:drinks"]), PRIMARY_KID, PRIMARY_PEM);
    let (head, _) = valid.rsplit_once('.').expect("Token has three segments");
    let tampered = format!("{head}.AAAA");
    let response = post_with_authorization(&app, Some(&format!("Bearer {tampered}"))).await;
    assert_eq!(response.status().as_u16(), 401);

    assert!(app.stored_drinks().await.is_empty());
}

#[tokio::test]
async fn should_return_401_for_unknown_key_id() {
    let app = TestApp::new().await;
    let token = sign(&claims(&["post:drinks"]), "retired-key", PRIMARY_PEM);

    let response = post_with_authorization(&app, Some(&format!("Bearer {token}"))).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_not_refetch_key_set_for_every_unknown_key_id() {
    let app = TestApp::new().await;

    for i in 0..5 {
        let token = sign(&claims(&["post:drinks"]), &format!("bogus-{i}"), PRIMARY_PEM);
        let response = post_with_authorization(&app, Some(&format!("Bearer {token}"))).await;

        assert_eq!(response.status().as_u16(), 401);
    }

    let requests = app
        .jwks_server
        .received_requests()
        .await
        .expect("Request recording is enabled");
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn should_accept_tokens_signed_by_a_rotated_key() {
    let jwks_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JWKS_PATH))
        .respond_with(jwks_response(JWKS))
        .up_to_n_times(1)
        .mount(&jwks_server)
        .await;
    Mock::given(method("GET"))
        .and(path(JWKS_PATH))
        .respond_with(jwks_response(JWKS_ROTATED))
        .mount(&jwks_server)
        .await;
    let app = TestApp::with_jwks_server(jwks_server).await;

    let primary = sign(&claims(&["post:drinks"]), PRIMARY_KID, PRIMARY_PEM);
    let response = post_with_authorization(&app, Some(&format!("Bearer {primary}"))).await;
    assert_eq!(response.status().as_u16(), 200);

    let rotated = sign(&claims(&["post:drinks"]), ROTATED_KID, ROTATED_PEM);
    let response = post_with_authorization(&app, Some(&format!("Bearer {rotated}"))).await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(app.stored_drinks().await.len(), 2);
    let requests = app
        .jwks_server
        .received_requests()
        .await
        .expect("Request recording is enabled");
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn should_return_500_when_key_set_is_unavailable() {
    let jwks_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JWKS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&jwks_server)
        .await;
    let app = TestApp::with_jwks_server(jwks_server).await;

    let token = sign(&claims(&["post:drinks"]), PRIMARY_KID, PRIMARY_PEM);
    let response = post_with_authorization(&app, Some(&format!("Bearer {token}"))).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(body_json(response).await, error_envelope(500, "server error"));
    assert!(app.stored_drinks().await.is_empty());
}
