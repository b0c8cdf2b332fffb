use serde_json::json;

use crate::helpers::{
    TestApp, body_json, error_envelope, latte_recipe, manager_token, random_title, token_with,
};

#[tokio::test]
async fn should_create_drink_and_return_long_form() {
    let app = TestApp::new().await;
    let title = random_title();
    let token = token_with(&["post:drinks"]);

    let response = app
        .post_drink(Some(&token), &json!({ "title": title, "recipe": latte_recipe() }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["drinks"][0]["title"], json!(title));
    assert_eq!(body["drinks"][0]["recipe"], latte_recipe());

    let stored = app.stored_drinks().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(json!(stored[0].id().value()), body["drinks"][0]["id"]);
}

#[tokio::test]
async fn should_accept_a_single_ingredient_object() {
    let app = TestApp::new().await;

    let response = app
        .post_drink(
            Some(&manager_token()),
            &json!({
                "title": "espresso",
                "recipe": { "color": "brown", "name": "espresso", "parts": 1 }
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = body_json(response).await;
    assert_eq!(
        body["drinks"][0]["recipe"],
        json!([{ "color": "brown", "name": "espresso", "parts": 1 }])
    );
}

#[tokio::test]
async fn should_return_422_for_missing_fields() {
    let app = TestApp::new().await;
    let token = manager_token();

    let cases = [
        json!({ "recipe": latte_recipe() }),
        json!({ "title": random_title() }),
        json!({ "title": "   ", "recipe": latte_recipe() }),
        json!({ "title": random_title(), "recipe": [] }),
        json!({}),
    ];

    for case in cases {
        let response = app.post_drink(Some(&token), &case).await;

        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {case:?}"
        );
        assert_eq!(
            body_json(response).await,
            error_envelope(422, "unprocessable")
        );
    }

    assert!(app.stored_drinks().await.is_empty());
}

#[tokio::test]
async fn should_return_422_for_duplicate_title() {
    let app = TestApp::new().await;
    let token = manager_token();
    let drink = json!({ "title": random_title(), "recipe": latte_recipe() });

    assert_eq!(app.post_drink(Some(&token), &drink).await.status().as_u16(), 200);
    let response = app.post_drink(Some(&token), &drink).await;

    assert_eq!(response.status().as_u16(), 422);
    assert_eq!(app.stored_drinks().await.len(), 1);
}

#[tokio::test]
async fn should_return_422_for_wrongly_typed_fields() {
    let app = TestApp::new().await;

    let response = app
        .post_drink(
            Some(&manager_token()),
            &json!({ "title": 42, "recipe": "espresso" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 422);
    assert_eq!(
        body_json(response).await,
        error_envelope(422, "unprocessable")
    );
}

#[tokio::test]
async fn should_return_400_for_malformed_json() {
    let app = TestApp::new().await;

    let response = app.post_raw_drink(&manager_token(), "{\"title\": ").await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(body_json(response).await, error_envelope(400, "bad request"));
}
