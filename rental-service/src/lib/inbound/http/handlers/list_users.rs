use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponse;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedIdentity;
use crate::inbound::http::router::AppState;
use crate::messages;

pub async fn list_users(
    State(state): State<AppState>,
    identity: AuthenticatedIdentity,
) -> Result<ApiSuccess<Vec<UserResponse>>, ApiError> {
    let users = state.user_service.list_users(&identity.user_id).await?;

    tracing::debug!(
        message_id = messages::INFO_USER_FETCH_SUCCESS.code,
        count = users.len(),
        "Users listed"
    );

    Ok(ApiSuccess::new(
        StatusCode::OK,
        users.iter().map(UserResponse::from).collect(),
    ))
}
