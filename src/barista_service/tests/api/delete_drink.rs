use barista_core::Ingredient;
use serde_json::json;

use crate::helpers::{TestApp, body_json, error_envelope, token_with};

#[tokio::test]
async fn should_delete_drink_and_return_its_id() {
    let app = TestApp::new().await;
    let drink = app
        .seed_drink("water", vec![Ingredient::new("blue", "water", 1)])
        .await;
    let token = token_with(&["delete:drinks"]);

    let response = app.delete_drink(Some(&token), &drink.id().to_string()).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "delete": drink.id().value() })
    );
    assert!(app.stored_drinks().await.is_empty());
}

#[tokio::test]
async fn should_return_404_for_unknown_drink() {
    let app = TestApp::new().await;
    let token = token_with(&["delete:drinks"]);

    let response = app.delete_drink(Some(&token), "999").await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        body_json(response).await,
        error_envelope(404, "resource not found")
    );
}

#[tokio::test]
async fn should_return_401_without_delete_permission() {
    let app = TestApp::new().await;
    let drink = app
        .seed_drink("water", vec![Ingredient::new("blue", "water", 1)])
        .await;
    let id = drink.id().to_string();
    let patch_only = token_with(&["patch:drinks"]);

    for token in [None, Some(patch_only.as_str())] {
        let response = app.delete_drink(token, &id).await;

        assert_eq!(response.status().as_u16(), 401);
        assert_eq!(body_json(response).await, error_envelope(401, "unauthorized"));
    }

    assert_eq!(app.stored_drinks().await, vec![drink]);
}

#[tokio::test]
async fn should_return_404_on_second_delete() {
    let app = TestApp::new().await;
    let drink = app
        .seed_drink("water", vec![Ingredient::new("blue", "water", 1)])
        .await;
    let token = token_with(&["delete:drinks"]);
    let id = drink.id().to_string();

    assert_eq!(app.delete_drink(Some(&token), &id).await.status().as_u16(), 200);
    assert_eq!(app.delete_drink(Some(&token), &id).await.status().as_u16(), 404);
}

#[tokio::test]
async fn should_not_reuse_deleted_ids() {
    let app = TestApp::new().await;
    let first = app
        .seed_drink("water", vec![Ingredient::new("blue", "water", 1)])
        .await;
    let token = token_with(&["delete:drinks"]);

    app.delete_drink(Some(&token), &first.id().to_string()).await;
    let second = app
        .seed_drink("tea", vec![Ingredient::new("green", "tea", 1)])
        .await;

    assert!(second.id() > first.id());
}
