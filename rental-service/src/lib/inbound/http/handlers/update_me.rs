use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::require;
use super::ApiError;
use super::ApiSuccess;
use super::UserResponse;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedIdentity;
use crate::inbound::http::router::AppState;
use crate::messages;
use crate::user::errors::UserError;

/// HTTP request body for updating the caller's profile (raw JSON)
#[derive(Deserialize)]
pub struct UpdateMeRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateMeRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, ApiError> {
        let name = self
            .username
            .map(DisplayName::new)
            .transpose()
            .map_err(UserError::from)?;
        let email = self
            .email
            .map(EmailAddress::new)
            .transpose()
            .map_err(UserError::from)?;

        let password = self
            .password
            .map(|password| require(password, "password"))
            .transpose()?;

        Ok(UpdateUserCommand {
            name,
            email,
            password,
        })
    }
}

pub async fn update_me(
    State(state): State<AppState>,
    identity: AuthenticatedIdentity,
    body: Result<Json<UpdateMeRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserResponse>, ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;

    let user = state
        .user_service
        .update_user(&identity.user_id, command)
        .await?;

    tracing::info!(
        message_id = messages::INFO_USER_UPDATE_SUCCESS.code,
        user_id = %user.id,
        "Profile updated"
    );

    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}
