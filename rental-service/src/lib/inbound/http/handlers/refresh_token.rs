use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::login::TokenResponse;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::messages;

pub async fn refresh_token(
    State(state): State<AppState>,
    body: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> Result<ApiSuccess<TokenResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        ApiError::BadRequest(messages::ERR_INVALID_REFRESH_TOKEN, rejection.body_text())
    })?;

    if body.refresh_token.trim().is_empty() {
        return Err(ApiError::BadRequest(
            messages::ERR_INVALID_REFRESH_TOKEN,
            "refresh_token is required".to_string(),
        ));
    }

    let tokens = state
        .auth_service
        .refresh_access_token(&body.refresh_token)
        .await?;

    tracing::info!(
        message_id = messages::INFO_ACCESS_TOKEN_SUCCESS.code,
        "Access token refreshed"
    );

    Ok(ApiSuccess::new(StatusCode::OK, tokens.into()))
}

/// HTTP request body for refreshing an access token (raw JSON)
#[derive(Deserialize)]
pub struct RefreshTokenRequest {
    #[serde(default)]
    refresh_token: String,
}
