use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedIdentity;
use crate::inbound::http::router::AppState;
use crate::messages;

pub async fn delete_me(
    State(state): State<AppState>,
    identity: AuthenticatedIdentity,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete_user(&identity.user_id).await?;

    tracing::info!(
        message_id = messages::INFO_USER_DELETE_SUCCESS.code,
        user_id = %identity.user_id,
        "Profile deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
