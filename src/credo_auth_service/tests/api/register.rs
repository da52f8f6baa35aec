use serde_json::{Value, json};

use crate::helpers::{TestApp, seeded_user};

#[tokio::test]
async fn register_returns_201_on_success() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&json!({
            "email": "test@email.com",
            "username": "testUser",
            "password": "testPassword",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["username"], "testUser");
    assert!(!body.to_string().contains("testPassword"));
}

#[tokio::test]
async fn register_returns_400_on_missing_password() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&json!({
            "email": "test@email.com",
            "username": "testUser",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn register_returns_409_when_account_already_exists() {
    let app = TestApp::new().await;
    let signup = json!({
        "email": "test1@email.com",
        "username": "testUser1",
        "password": "testPassword",
    });

    let first = app.post_register(&signup).await;
    let second = app.post_register(&signup).await;

    assert_eq!(first.status().as_u16(), 201);
    assert_eq!(second.status().as_u16(), 409);
}

#[tokio::test]
async fn register_returns_409_when_only_the_email_collides() {
    let app = TestApp::with_seeded_user().await;
    let mut signup = seeded_user();
    signup["username"] = json!("someone_else");

    let response = app.post_register(&signup).await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn register_returns_409_when_only_the_username_collides() {
    let app = TestApp::with_seeded_user().await;
    let mut signup = seeded_user();
    signup["email"] = json!("someone_else@example.com");

    let response = app.post_register(&signup).await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn register_then_login_round_trip() {
    let app = TestApp::new().await;

    app.post_register(&json!({ "email": "a@x.com", "username": "a", "password": "p" }))
        .await;

    let ok = app
        .post_login_username(&json!({ "username": "a", "password": "p" }))
        .await;
    let wrong = app
        .post_login_username(&json!({ "username": "a", "password": "wrong" }))
        .await;
    let missing = app.post_login_username(&json!({ "username": "a" })).await;

    assert_eq!(ok.status().as_u16(), 200);
    assert_eq!(wrong.status().as_u16(), 401);
    assert_eq!(missing.status().as_u16(), 400);
}
