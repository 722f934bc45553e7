use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::require;
use super::ApiError;
use super::ApiSuccess;
use super::MessageBody;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::messages;
use crate::user::errors::DisplayNameError;
use crate::user::errors::EmailError;

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<MessageBody>, ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;

    let user = state.auth_service.register(command).await?;

    tracing::info!(
        message_id = messages::INFO_USER_REGISTER_SUCCESS.code,
        user_id = %user.id,
        "User registered"
    );

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        MessageBody::new(messages::INFO_USER_REGISTER_SUCCESS),
    ))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid username: {0}")]
    Name(#[from] DisplayNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ApiError> {
        let username = require(self.username, "username")?;
        let email = require(self.email, "email")?;
        let password = require(self.password, "password")?;

        let name = DisplayName::new(username).map_err(ParseRegisterRequestError::from)?;
        let email = EmailAddress::new(email).map_err(ParseRegisterRequestError::from)?;

        Ok(RegisterCommand::new(name, email, password))
    }
}
