use serde_json::{Value, json};

use crate::helpers::{SEEDED_EMAIL, SEEDED_PASSWORD, SEEDED_USERNAME, TestApp};

#[tokio::test]
async fn login_by_username_returns_200_on_success() {
    let app = TestApp::with_seeded_user().await;

    let response = app
        .post_login_username(&json!({
            "username": SEEDED_USERNAME,
            "password": SEEDED_PASSWORD,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["username"], SEEDED_USERNAME);
    assert_eq!(body["user"]["email"], SEEDED_EMAIL);
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn login_by_username_returns_400_on_missing_password() {
    let app = TestApp::with_seeded_user().await;

    let response = app
        .post_login_username(&json!({ "username": SEEDED_USERNAME }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["fields"][0]["field"], "password");
    assert_eq!(body["fields"][0]["problem"], "missing");
}

#[tokio::test]
async fn login_by_username_returns_401_on_wrong_password() {
    let app = TestApp::with_seeded_user().await;

    let response = app
        .post_login_username(&json!({
            "username": SEEDED_USERNAME,
            "password": "password",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn login_by_email_returns_200_on_success() {
    let app = TestApp::with_seeded_user().await;

    let response = app
        .post_login_email(&json!({
            "email": SEEDED_EMAIL,
            "password": SEEDED_PASSWORD,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn login_by_email_returns_400_on_missing_password() {
    let app = TestApp::with_seeded_user().await;

    let response = app
        .post_login_email(&json!({ "email": SEEDED_EMAIL }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn login_by_email_returns_401_on_wrong_password() {
    let app = TestApp::with_seeded_user().await;

    let response = app
        .post_login_email(&json!({
            "email": SEEDED_EMAIL,
            "password": "password",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn unknown_account_and_wrong_password_get_the_same_response() {
    let app = TestApp::with_seeded_user().await;

    let unknown = app
        .post_login_email(&json!({
            "email": "nobody@example.com",
            "password": SEEDED_PASSWORD,
        }))
        .await;
    let wrong = app
        .post_login_email(&json!({
            "email": SEEDED_EMAIL,
            "password": "password",
        }))
        .await;

    assert_eq!(unknown.status(), wrong.status());
    let unknown_body: Value = unknown.json().await.unwrap();
    let wrong_body: Value = wrong.json().await.unwrap();
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn non_json_body_returns_400() {
    let app = TestApp::with_seeded_user().await;

    let response = app
        .http_client
        .post(format!("{}/api/users/login/username", app.address))
        .body("username=a&password=p")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn login_with_unregistrable_identifiers_returns_401() {
    let app = TestApp::with_seeded_user().await;

    let by_email = app
        .post_login_email(&json!({ "email": "nobody", "password": "p" }))
        .await;
    let by_username = app
        .post_login_username(&json!({ "username": "u".repeat(65), "password": "p" }))
        .await;

    assert_eq!(by_email.status().as_u16(), 401);
    assert_eq!(by_username.status().as_u16(), 401);
}
