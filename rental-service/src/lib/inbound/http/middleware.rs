use auth::TokenKind;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::auth::ports::TokenSigner;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::messages;

const BEARER_PREFIX: &str = "Bearer ";

/// Identity of the caller, stored in request extensions by [`authenticate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware that admits requests carrying a valid access token.
///
/// Every failure yields the same 401 body; the reason is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req)?;

    let claims = state
        .token_signer
        .verify_token(token, TokenKind::Access)
        .map_err(|e| {
            tracing::warn!(
                message_id = messages::ERR_INVALID_ACCESS_TOKEN.code,
                error = %e,
                "Access token rejected"
            );
            ApiError::unauthorized("")
        })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(
            message_id = messages::ERR_INVALID_ACCESS_TOKEN.code,
            error = %e,
            "Access token subject is not a user id"
        );
        ApiError::unauthorized("")
    })?;

    req.extensions_mut().insert(AuthenticatedIdentity {
        user_id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let value = header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header"))?;

    value
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::unauthorized("Expected: Bearer <token>"))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedIdentity>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("No authenticated identity on request"))
    }
}
