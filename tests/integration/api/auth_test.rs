//! Authentication API integration tests
//!
//! Tests for the sign-up and sign-in endpoints.

use axum::http::StatusCode;
use bloodconnect::shared::Role;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{post_json, post_raw, unique_email, TestApp};
use crate::{assert_failure, assert_ok, assert_success};

fn sign_up_body(email: &str, password: &str) -> serde_json::Value {
    json!({
        "donorName": "Alice",
        "donorEmail": email,
        "donorPassword": password,
        "donorDOB": "2000-01-01"
    })
}

#[tokio::test]
async fn test_alice_end_to_end() {
    let app = TestApp::new().await;

    let (status, body) = post_json(&app.router, "/sign-up", &sign_up_body("a@x.com", "pw123"), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_success!(body, "User registered successfully.");

    let (status, body) = post_json(
        &app.router,
        "/sign-in",
        &json!({ "email": "a@x.com", "password": "pw123" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_success!(body);
    assert_eq!(body["user"]["role"], "donor");
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["user"].get("password").is_none());
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));

    let (status, body) = post_json(
        &app.router,
        "/sign-in",
        &json!({ "email": "a@x.com", "password": "wrong" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_failure!(body, "Invalid email or password.");
}

#[tokio::test]
async fn test_sign_up_stores_hash() {
    let app = TestApp::new().await;
    let email = unique_email();

    let (status, _) = post_json(&app.router, "/sign-up", &sign_up_body(&email, "pw123"), None).await;
    assert_eq!(status, StatusCode::CREATED);

    let stored = app.db.stored_password("donor", &email).await.unwrap();
    assert_ne!(stored, "pw123");
    assert!(assert_ok!(bcrypt::verify("pw123", &stored)));
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let app = TestApp::new().await;
    let email = unique_email();

    post_json(&app.router, "/sign-up", &sign_up_body(&email, "first"), None).await;
    let first = app.db.stored_password("donor", &email).await.unwrap();

    let (status, body) = post_json(&app.router, "/sign-up", &sign_up_body(&email, "second"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure!(body, "Email already exists.");

    assert_eq!(app.db.count("donor").await, 1);
    assert_eq!(app.db.stored_password("donor", &email).await.unwrap(), first);
}

#[tokio::test]
async fn test_sign_up_missing_fields() {
    let app = TestApp::new().await;

    let bodies = [
        json!({ "donorEmail": "b@x.com", "donorPassword": "pw", "donorDOB": "2000-01-01" }),
        json!({ "donorName": "Bob", "donorPassword": "pw", "donorDOB": "2000-01-01" }),
        json!({ "donorName": "Bob", "donorEmail": "b@x.com", "donorDOB": "2000-01-01" }),
        json!({ "donorName": "Bob", "donorEmail": "b@x.com", "donorPassword": "pw" }),
        json!({ "donorName": "", "donorEmail": "b@x.com", "donorPassword": "pw", "donorDOB": "2000-01-01" }),
        json!({}),
    ];

    for body in &bodies {
        let (status, response) = post_json(&app.router, "/sign-up", body, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "request: {}", body);
        assert_failure!(response, "All fields are required.");
    }

    assert_eq!(app.db.count("donor").await, 0);
}

#[tokio::test]
async fn test_sign_up_malformed_body() {
    let app = TestApp::new().await;

    let (status, body) = post_raw(&app.router, "/sign-up", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(app.db.count("donor").await, 0);
}

#[tokio::test]
async fn test_sign_in_unknown_email_matches_wrong_password() {
    let app = TestApp::new().await;
    app.seed_account(Role::Donor, "known@x.com", "pw123").await;

    let (_, unknown) = post_json(
        &app.router,
        "/sign-in",
        &json!({ "email": "nobody@x.com", "password": "pw123" }),
        None,
    )
    .await;
    let (_, wrong) = post_json(
        &app.router,
        "/sign-in",
        &json!({ "email": "known@x.com", "password": "nope" }),
        None,
    )
    .await;

    assert_eq!(unknown, wrong);
    assert_failure!(unknown, "Invalid email or password.");
}

#[tokio::test]
async fn test_sign_in_empty_fields() {
    let app = TestApp::new().await;

    let (status, body) = post_json(&app.router, "/sign-in", &json!({}), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_failure!(body, "Invalid email or password.");
}

#[tokio::test]
async fn test_sign_in_resolves_staff_and_admin() {
    let app = TestApp::new().await;
    app.seed_account(Role::MedicalStaff, "nurse@x.com", "staffpw").await;
    app.seed_account(Role::Admin, "boss@x.com", "adminpw").await;

    let (_, body) = post_json(
        &app.router,
        "/sign-in",
        &json!({ "email": "nurse@x.com", "password": "staffpw" }),
        None,
    )
    .await;
    assert_eq!(body["user"]["role"], "medical-staff");

    let (_, body) = post_json(
        &app.router,
        "/sign-in",
        &json!({ "email": "boss@x.com", "password": "adminpw" }),
        None,
    )
    .await;
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
async fn test_sign_in_donor_table_shadows_admin() {
    let app = TestApp::new().await;
    app.seed_account(Role::Donor, "shared@x.com", "donorpw").await;
    app.seed_account(Role::Admin, "shared@x.com", "adminpw").await;

    let (_, body) = post_json(
        &app.router,
        "/sign-in",
        &json!({ "email": "shared@x.com", "password": "adminpw" }),
        None,
    )
    .await;
    assert_failure!(body, "Invalid email or password.");

    let (_, body) = post_json(
        &app.router,
        "/sign-in",
        &json!({ "email": "shared@x.com", "password": "donorpw" }),
        None,
    )
    .await;
    assert_eq!(body["user"]["role"], "donor");
}

#[tokio::test]
async fn test_sign_in_token_carries_claims() {
    let app = TestApp::new().await;
    let id = app.seed_account(Role::Admin, "boss@x.com", "adminpw").await;

    let (_, body) = post_json(
        &app.router,
        "/sign-in",
        &json!({ "email": "boss@x.com", "password": "adminpw" }),
        None,
    )
    .await;

    let token = body["token"].as_str().unwrap();
    let claims = assert_ok!(app.state.sessions.verify(token), "token should verify");
    assert_eq!(claims.id, id);
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.email, "boss@x.com");
}

#[tokio::test]
async fn test_sign_in_database_failure() {
    let app = TestApp::new().await;
    app.db.pool().close().await;

    let (status, body) = post_json(
        &app.router,
        "/sign-in",
        &json!({ "email": "a@x.com", "password": "pw" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], true);
    assert_failure!(body, "Error querying database.");
}
