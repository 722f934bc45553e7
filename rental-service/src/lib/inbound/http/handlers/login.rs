use auth::TokenPair;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::require;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::messages;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<TokenResponse>, ApiError> {
    let Json(body) = body?;
    let command = LoginCommand {
        email: require(body.email, "email")?,
        password: require(body.password, "password")?,
    };

    let tokens = state.auth_service.login(command).await?;

    tracing::info!(
        message_id = messages::INFO_USER_LOGIN_SUCCESS.code,
        "User logged in"
    );

    Ok(ApiSuccess::new(StatusCode::OK, tokens.into()))
}

/// HTTP request body for logging in (raw JSON)
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Token set returned by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            token_type: "Bearer".to_string(),
            expires_in: tokens.expires_in,
            refresh_token: tokens.refresh_token,
        }
    }
}
