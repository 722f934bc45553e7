use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponse;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedIdentity;
use crate::inbound::http::router::AppState;
use crate::messages;

pub async fn get_me(
    State(state): State<AppState>,
    identity: AuthenticatedIdentity,
) -> Result<ApiSuccess<UserResponse>, ApiError> {
    let user = state.user_service.get_user(&identity.user_id).await?;

    tracing::debug!(
        message_id = messages::INFO_USER_FETCH_SUCCESS.code,
        user_id = %user.id,
        "Profile fetched"
    );

    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}
