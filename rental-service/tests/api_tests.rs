mod common;

use std::sync::Arc;

use auth::Claims;
use auth::JwtError;
use auth::TokenKind;
use auth::TokenPair;
use axum::http::StatusCode;
use chrono::Duration;
use common::TestApp;
use rental_service::domain::auth::ports::TokenSigner;
use rental_service::domain::user::models::UserId;
use rental_service::domain::user::models::UserRole;
use serde_json::json;

/// Signer that accepts one fixed access token for one fixed identity.
struct FixedTokenSigner {
    token: &'static str,
    subject: String,
}

impl TokenSigner for FixedTokenSigner {
    fn issue_token_pair(&self, _subject: &str, _email: &str) -> Result<TokenPair, JwtError> {
        Err(JwtError::EncodingFailed("not used".to_string()))
    }

    fn issue_access_token(&self, _subject: &str, _email: &str) -> Result<String, JwtError> {
        Err(JwtError::EncodingFailed("not used".to_string()))
    }

    fn verify_token(&self, token: &str, expected_kind: TokenKind) -> Result<Claims, JwtError> {
        if token != self.token {
            return Err(JwtError::MalformedToken("unknown token".to_string()));
        }
        Ok(Claims::new(
            &self.subject,
            "fixed@x.com",
            expected_kind,
            Duration::minutes(5),
        ))
    }

    fn access_token_expires_in(&self) -> i64 {
        300
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn();

    let response = app.request(axum::http::Method::GET, "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn();

    let response = app.register("Alice", "a@x.com", "secret123").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["messageID"], "USR001I");
    assert!(response.body.get("exception").is_none());

    let stored = app.repository.stored("a@x.com").expect("User not stored");
    assert_eq!(stored.name.as_str(), "Alice");
    assert_eq!(stored.role, UserRole::User);
    assert_ne!(stored.password_hash, "secret123");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn();

    app.register("Alice", "a@x.com", "secret123").await;
    let response = app.register("Other", "a@x.com", "another").await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["messageID"], "USR005E");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::spawn();

    let response = app
        .post("/v1/auth/register", json!({ "email": "a@x.com" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["messageID"], "SYS005E");
    assert_eq!(response.body["exception"], "username is required");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn();

    let response = app.register("Alice", "not-an-email", "secret123").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["messageID"], "SYS005E");
}

#[tokio::test]
async fn test_register_malformed_json() {
    let app = TestApp::spawn();

    let response = app.post_raw("/v1/auth/register", "{not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["messageID"], "SYS005E");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn();

    let body = app.signed_in("Alice", "a@x.com", "secret123").await;

    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 3600);

    let user_id = app.repository.stored("a@x.com").unwrap().id.to_string();
    let access = app
        .jwt_handler
        .verify(body["access_token"].as_str().unwrap(), TokenKind::Access)
        .unwrap();
    assert_eq!(access.sub, user_id);
    assert_eq!(access.email, "a@x.com");

    let refresh = app
        .jwt_handler
        .verify(body["refresh_token"].as_str().unwrap(), TokenKind::Refresh)
        .unwrap();
    assert_eq!(refresh.sub, user_id);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn();
    app.register("Alice", "a@x.com", "secret123").await;

    let response = app.login("a@x.com", "wrong").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["messageID"], "USR002E");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::spawn();

    let response = app.login("nobody@x.com", "secret123").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["messageID"], "USR006E");
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::spawn();

    let response = app
        .post("/v1/auth/login", json!({ "email": "a@x.com" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["messageID"], "SYS005E");
}

#[tokio::test]
async fn test_refresh_success() {
    let app = TestApp::spawn();
    let tokens = app.signed_in("Alice", "a@x.com", "secret123").await;
    let refresh_token = tokens["refresh_token"].as_str().unwrap();

    let response = app
        .post("/v1/auth/refresh", json!({ "refresh_token": refresh_token }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["refresh_token"], refresh_token);
    assert_eq!(response.body["token_type"], "Bearer");
    assert_eq!(response.body["expires_in"], 3600);

    let access_token = response.body["access_token"].as_str().unwrap();
    let me = app
        .get_authorized("/v1/me", &format!("Bearer {access_token}"))
        .await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["email"], "a@x.com");
}

#[tokio::test]
async fn test_refresh_with_access_token() {
    let app = TestApp::spawn();
    let tokens = app.signed_in("Alice", "a@x.com", "secret123").await;

    let response = app
        .post(
            "/v1/auth/refresh",
            json!({ "refresh_token": tokens["access_token"] }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["messageID"], "AUTH002E");
}

#[tokio::test]
async fn test_refresh_with_malformed_body() {
    let app = TestApp::spawn();

    let response = app.post_raw("/v1/auth/refresh", "{").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["messageID"], "AUTH002E");
}

#[tokio::test]
async fn test_protected_route_without_header() {
    let app = TestApp::spawn();

    let response = app
        .request(axum::http::Method::GET, "/v1/me", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["messageID"], "AUTH006E");
    assert_eq!(response.body["message"], "Missing or invalid token");
}

#[tokio::test]
async fn test_protected_route_with_basic_scheme() {
    let app = TestApp::spawn();

    let response = app.get_authorized("/v1/me", "Basic xyz").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["messageID"], "AUTH006E");
}

#[tokio::test]
async fn test_protected_route_with_empty_bearer() {
    let app = TestApp::spawn();

    let response = app.get_authorized("/v1/me", "Bearer ").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let app = TestApp::spawn();
    app.signed_in("Alice", "a@x.com", "secret123").await;
    let user_id = app.repository.stored("a@x.com").unwrap().id.to_string();

    let expired = app
        .jwt_handler
        .issue(&user_id, "a@x.com", TokenKind::Access, Duration::seconds(-60))
        .unwrap();
    let response = app
        .get_authorized("/v1/me", &format!("Bearer {expired}"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["messageID"], "AUTH006E");
    assert!(response.body.get("exception").is_none());
}

#[tokio::test]
async fn test_protected_route_with_refresh_token() {
    let app = TestApp::spawn();
    let tokens = app.signed_in("Alice", "a@x.com", "secret123").await;
    let refresh_token = tokens["refresh_token"].as_str().unwrap();

    let response = app
        .get_authorized("/v1/me", &format!("Bearer {refresh_token}"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_me() {
    let app = TestApp::spawn();
    let tokens = app.signed_in("Alice", "a@x.com", "secret123").await;
    let access_token = tokens["access_token"].as_str().unwrap();

    let response = app
        .get_authorized("/v1/me", &format!("Bearer {access_token}"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Alice");
    assert_eq!(response.body["email"], "a@x.com");
    assert_eq!(response.body["role"], "user");
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_update_me() {
    let app = TestApp::spawn();
    let tokens = app.signed_in("Alice", "a@x.com", "secret123").await;
    let access_token = tokens["access_token"].as_str().unwrap();

    let response = app
        .patch_authorized(
            "/v1/me",
            access_token,
            json!({ "username": "Alicia", "password": "newsecret" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Alicia");
    assert_eq!(response.body["email"], "a@x.com");

    assert_eq!(app.login("a@x.com", "secret123").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.login("a@x.com", "newsecret").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_me_email_taken() {
    let app = TestApp::spawn();
    app.register("Bob", "b@x.com", "secret123").await;
    let tokens = app.signed_in("Alice", "a@x.com", "secret123").await;
    let access_token = tokens["access_token"].as_str().unwrap();

    let response = app
        .patch_authorized("/v1/me", access_token, json!({ "email": "b@x.com" }))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["messageID"], "USR009E");
}

#[tokio::test]
async fn test_delete_me() {
    let app = TestApp::spawn();
    let tokens = app.signed_in("Alice", "a@x.com", "secret123").await;
    let access_token = tokens["access_token"].as_str().unwrap();

    let response = app.delete_authorized("/v1/me", access_token).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(app.repository.stored("a@x.com").is_none());

    let again = app.delete_authorized("/v1/me", access_token).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body["messageID"], "USR006E");
}

#[tokio::test]
async fn test_list_users_requires_admin() {
    let app = TestApp::spawn();
    let tokens = app.signed_in("Alice", "a@x.com", "secret123").await;
    let access_token = tokens["access_token"].as_str().unwrap();

    let response = app
        .get_authorized("/v1/users", &format!("Bearer {access_token}"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["messageID"], "AUTH005E");
}

#[tokio::test]
async fn test_list_users_as_admin() {
    let app = TestApp::spawn();
    app.register("Bob", "b@x.com", "secret123").await;
    let tokens = app.signed_in("Alice", "a@x.com", "secret123").await;
    app.repository.set_role("a@x.com", UserRole::Admin);
    let access_token = tokens["access_token"].as_str().unwrap();

    let response = app
        .get_authorized("/v1/users", &format!("Bearer {access_token}"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u["email"] == "b@x.com"));
}

#[tokio::test]
async fn test_update_me_rejects_blank_password() {
    let app = TestApp::spawn();
    let tokens = app.signed_in("Alice", "a@x.com", "secret123").await;
    let access_token = tokens["access_token"].as_str().unwrap();

    let response = app
        .patch_authorized("/v1/me", access_token, json!({ "password": "   " }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["messageID"], "SYS005E");
    assert_eq!(response.body["exception"], "password is required");
    assert_eq!(app.login("a@x.com", "secret123").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_gate_verifies_through_token_signer() {
    let subject = UserId::new().to_string();
    let app = TestApp::spawn_with_gate_signer(Arc::new(FixedTokenSigner {
        token: "fixed-token",
        subject,
    }));

    let tokens = app.signed_in("Alice", "a@x.com", "secret123").await;
    let real_token = tokens["access_token"].as_str().unwrap();
    let rejected = app
        .get_authorized("/v1/me", &format!("Bearer {real_token}"))
        .await;
    assert_eq!(rejected.status, StatusCode::UNAUTHORIZED);

    // Accepted by the gate; the identity it carries has no stored user.
    let admitted = app.get_authorized("/v1/me", "Bearer fixed-token").await;
    assert_eq!(admitted.status, StatusCode::NOT_FOUND);
    assert_eq!(admitted.body["messageID"], "USR006E");
}
